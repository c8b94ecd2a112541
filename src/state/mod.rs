//! State management for Botdeck.
//!
//! Centralized state with a unidirectional data flow pattern: input and
//! app events become [`Action`]s, the [`Store`] reduces them. Effectful
//! actions (mounting the embed surface, opening a browser) are intercepted
//! by the app before reduction.

mod app_state;
mod banner_state;
mod embed_state;
mod trading_state;

pub use app_state::{AppState, CardAction, LAUNCH_CARDS, LaunchCard, View};
pub use banner_state::BannerState;
pub use embed_state::{EmbedPhase, EmbedState};
pub use trading_state::{TRADING_PARAMS, TradingParam, TradingState, TradingStatus};

use crate::catalog::{Tool, ToolCatalog};
use crate::config::UiConfig;
use crate::embed::EmbedContent;
use crate::error::Result;
use crate::ui::layout::embed_height;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),

    // Tool selection
    SelectTool(String),
    NextTool,
    PrevTool,

    // Embed lifecycle
    EmbedLoaded { token: u64, content: EmbedContent },
    EmbedFailed { token: u64, reason: String },
    RetryEmbed,
    OpenExternal,

    // Geometry
    ViewportResized(u16, u16),
    RecomputeGeometry,

    // Dashboard cards
    CardLeft,
    CardRight,
    ActivateCard,

    // Auto trading
    StartTrading,
    StopTrading,
    TradingParamPrev,
    TradingParamNext,
    TradingParamDecrease,
    TradingParamIncrease,

    // Banner
    DismissBanner,
    OpenBannerLink,

    // UI
    Tick,
    ToggleHelp,

    // Quit
    Quit,
}

/// The global state store.
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Embedded viewer state.
    pub embed: EmbedState,
    /// Notification banner state.
    pub banner: BannerState,
    /// Automated trading controls state.
    pub trading: TradingState,
    /// The fixed tool catalog.
    pub catalog: ToolCatalog,
    /// UI configuration (geometry constants, thresholds).
    pub ui: UiConfig,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store. The selected tool defaults to the catalog's
    /// first entry and its initial mount is considered pending.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        catalog: ToolCatalog,
        ui: UiConfig,
        banner: BannerState,
    ) -> Self {
        let embed = EmbedState::new(catalog.first().id.clone());
        let mut store = Self {
            app: AppState::new(),
            embed,
            banner,
            trading: TradingState::default(),
            catalog,
            ui,
            action_tx,
        };
        store.recompute_geometry();
        store
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// The tool the embed pane shows. Unknown ids resolve to the first
    /// catalog entry.
    pub fn current_tool(&self) -> &Tool {
        self.catalog.resolve(&self.embed.selected_tool_id)
    }

    /// Select a tool by id. Ids not in the catalog are a no-op.
    ///
    /// Returns true when a new mount is required.
    pub fn select_tool(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::debug!(id, "ignoring selection of unknown tool");
            return false;
        }
        let changed = self.embed.select(id);
        if changed {
            self.recompute_geometry();
        }
        changed
    }

    /// Select the next tool in catalog order.
    pub fn select_next_tool(&mut self) -> bool {
        let id = self.catalog.next_id(&self.embed.selected_tool_id).to_string();
        self.select_tool(&id)
    }

    /// Select the previous tool in catalog order.
    pub fn select_prev_tool(&mut self) -> bool {
        let id = self.catalog.prev_id(&self.embed.selected_tool_id).to_string();
        self.select_tool(&id)
    }

    /// Retry a failed embed. No-op unless in the error state.
    ///
    /// Returns true when a new mount is required.
    pub fn retry_embed(&mut self) -> bool {
        self.embed.retry()
    }

    /// Rows occupied above the embed pane: status bar, banner (when
    /// visible), tab bar, tool selector.
    fn embed_top_offset(&self) -> u16 {
        let banner = u16::from(self.banner.visible);
        banner + 3
    }

    /// Recompute the embed pane height from current terminal metrics.
    pub fn recompute_geometry(&mut self) {
        let (_, rows) = self.app.viewport;
        self.embed.computed_height = embed_height(
            rows,
            self.embed_top_offset(),
            self.ui.min_embed_height,
            self.ui.bottom_margin,
        );
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,

            // Tool selection: effectful variants are normally intercepted by
            // the app; reducing them applies the state part only.
            Action::SelectTool(id) => {
                self.select_tool(&id);
            }
            Action::NextTool => {
                self.select_next_tool();
            }
            Action::PrevTool => {
                self.select_prev_tool();
            }

            // Embed lifecycle. Signals from superseded mounts carry an older
            // token and are dropped.
            Action::EmbedLoaded { token, content } => {
                if token == self.embed.reload_token {
                    self.embed.loaded(content);
                } else {
                    tracing::debug!(token, current = self.embed.reload_token, "stale load signal");
                }
            }
            Action::EmbedFailed { token, reason } => {
                if token == self.embed.reload_token {
                    tracing::warn!(%reason, "embed load failure");
                    self.embed.failed();
                } else {
                    tracing::debug!(token, current = self.embed.reload_token, "stale failure signal");
                }
            }
            Action::RetryEmbed => {
                self.retry_embed();
            }
            // Out-of-band navigation; no state transition.
            Action::OpenExternal => {}

            // Geometry
            Action::ViewportResized(cols, rows) => {
                self.app.viewport = (cols, rows);
                self.recompute_geometry();
            }
            Action::RecomputeGeometry => self.recompute_geometry(),

            // Dashboard cards
            Action::CardLeft => self.app.move_card_selection(-1),
            Action::CardRight => self.app.move_card_selection(1),
            Action::ActivateCard => {}

            // Auto trading
            Action::StartTrading => self.trading.start(),
            Action::StopTrading => self.trading.stop(),
            Action::TradingParamPrev => self.trading.move_param_selection(-1),
            Action::TradingParamNext => self.trading.move_param_selection(1),
            Action::TradingParamDecrease => self.trading.adjust_selected(-1),
            Action::TradingParamIncrease => self.trading.adjust_selected(1),

            // Banner
            Action::DismissBanner => {
                self.banner.dismiss();
                self.recompute_geometry();
            }
            // Out-of-band navigation; no state transition.
            Action::OpenBannerLink => {}

            // UI
            Action::Tick => {
                let was_visible = self.banner.visible;
                self.banner.tick();
                if was_visible && !self.banner.visible {
                    self.recompute_geometry();
                }
            }
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_store() -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let catalog = ToolCatalog::from_entries(vec![
            Tool::new("A", "Tool A", "https://a.example"),
            Tool::new("B", "Tool B", "https://b.example"),
        ]);
        let banner = BannerState::restore(
            &crate::storage::MemoryStore::new(),
            &crate::config::BannerConfig::default(),
            250,
        );
        (Store::new(tx, catalog, UiConfig::default(), banner), rx)
    }

    fn content(url: &str) -> EmbedContent {
        EmbedContent {
            final_url: url.to_string(),
            status: 200,
            bytes: 64,
            title: None,
        }
    }

    #[test]
    fn test_dispatch_delivers_on_action_channel() {
        let (store, mut rx) = test_store();
        store.dispatch(Action::Quit).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::Quit)));
    }

    #[test]
    fn test_default_selection_is_first_catalog_entry() {
        let (store, _rx) = test_store();
        assert_eq!(store.embed.selected_tool_id, "A");
        assert!(store.embed.is_loading);
    }

    #[test]
    fn test_unknown_tool_selection_is_noop() {
        let (mut store, _rx) = test_store();
        let token = store.embed.reload_token;
        assert!(!store.select_tool("missing"));
        assert_eq!(store.embed.selected_tool_id, "A");
        assert_eq!(store.embed.reload_token, token);
    }

    #[test]
    fn test_stale_signals_are_dropped() {
        let (mut store, _rx) = test_store();
        store.select_tool("B");
        let current = store.embed.reload_token;

        // A signal from the superseded mount of "A".
        store.reduce(Action::EmbedLoaded {
            token: current - 1,
            content: content("https://a.example/"),
        });
        assert!(store.embed.is_loading);

        store.reduce(Action::EmbedFailed {
            token: current - 1,
            reason: "late timeout".into(),
        });
        assert!(store.embed.is_loading);
        assert!(!store.embed.has_error);

        // The current mount's signal applies.
        store.reduce(Action::EmbedLoaded {
            token: current,
            content: content("https://b.example/"),
        });
        assert_eq!(store.embed.phase(), EmbedPhase::Ready);
    }

    #[test]
    fn test_resize_recomputes_height_with_floor() {
        let (mut store, _rx) = test_store();
        store.reduce(Action::ViewportResized(120, 50));
        let tall = store.embed.computed_height;
        assert!(tall >= store.ui.min_embed_height);
        assert_eq!(
            tall,
            50 - 4 /* status + banner + tab + selector */ - store.ui.bottom_margin
        );

        // Tiny terminal: the floor holds.
        store.reduce(Action::ViewportResized(120, 4));
        assert_eq!(store.embed.computed_height, store.ui.min_embed_height);
    }

    #[test]
    fn test_banner_dismissal_recomputes_geometry() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let catalog = ToolCatalog::default();
        let banner = BannerState::restore(
            &crate::storage::MemoryStore::new(),
            &crate::config::BannerConfig::default(),
            250,
        );
        let mut store = Store::new(tx, catalog, UiConfig::default(), banner);
        assert!(store.banner.visible);

        store.reduce(Action::ViewportResized(120, 40));
        let with_banner = store.embed.computed_height;
        store.reduce(Action::DismissBanner);
        assert_eq!(store.embed.computed_height, with_banner + 1);
    }

    #[test]
    fn test_trading_actions_through_store() {
        let (mut store, _rx) = test_store();
        store.reduce(Action::StartTrading);
        assert!(store.trading.is_running());

        store.reduce(Action::TradingParamNext);
        store.reduce(Action::TradingParamIncrease);
        assert_eq!(store.trading.stop_loss, 6.0);

        store.reduce(Action::StopTrading);
        assert!(!store.trading.is_running());
    }

    #[test]
    fn test_scenario_through_store() {
        let (mut store, _rx) = test_store();

        // Mount: selected "A", loading, no error.
        assert_eq!(store.embed.selected_tool_id, "A");
        assert!(store.embed.is_loading && !store.embed.has_error);

        // Load signal arrives.
        let t = store.embed.reload_token;
        store.reduce(Action::EmbedLoaded {
            token: t,
            content: content("https://a.example/"),
        });
        assert!(!store.embed.is_loading && !store.embed.has_error);

        // Select "B".
        assert!(store.select_tool("B"));
        assert!(store.embed.is_loading && !store.embed.has_error);
        assert!(store.embed.reload_token > t);

        // Failure signal.
        let t = store.embed.reload_token;
        store.reduce(Action::EmbedFailed {
            token: t,
            reason: "dns error".into(),
        });
        assert!(!store.embed.is_loading && store.embed.has_error);

        // Retry.
        assert!(store.retry_embed());
        assert!(store.embed.is_loading && !store.embed.has_error);
        assert_eq!(store.embed.reload_token, t + 1);
    }
}
