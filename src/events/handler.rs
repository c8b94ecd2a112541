//! Event handler mapping input events to actions.

use crate::config::KeyBindings;
use crate::state::{Action, Store, View};
use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::InputEvent;

/// Maps terminal input to actions, using the current store for
/// state-aware handling (e.g. open-externally only from the error state).
pub struct EventHandler {
    keybindings: KeyBindings,
}

impl EventHandler {
    /// Create a new event handler with the given bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self { keybindings }
    }

    /// Handle a key event and return an optional action.
    pub fn handle_key(&self, key: KeyEvent, store: &Store) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = InputEvent::from(key);

        if store.app.show_help {
            // Any bound key closes the overlay.
            if input.matches(&self.keybindings.help) || input.matches("Esc") {
                return Some(Action::ToggleHelp);
            }
            return None;
        }

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.dashboard) {
            return Some(Action::SetView(View::Dashboard));
        }
        if input.matches(&self.keybindings.signals) {
            return Some(Action::SetView(View::Signals));
        }
        if input.matches(&self.keybindings.trading) {
            return Some(Action::SetView(View::Trading));
        }

        // Banner shortcuts only make sense while it is visible, and
        // dismissal only when the banner is configured dismissable.
        if store.banner.visible {
            if store.banner.can_close && input.matches(&self.keybindings.dismiss_banner) {
                return Some(Action::DismissBanner);
            }
            if input.matches(&self.keybindings.banner_link) {
                return Some(Action::OpenBannerLink);
            }
        }

        match store.app.current_view {
            View::Dashboard => self.handle_dashboard(input),
            View::Signals => self.handle_signals(input, store),
            View::Trading => self.handle_trading(input, store),
        }
    }

    /// Handle a mouse event and return an optional action.
    pub fn handle_mouse(&self, mouse: MouseEvent, store: &Store) -> Option<Action> {
        match (mouse.kind, store.app.current_view) {
            (MouseEventKind::ScrollUp, View::Dashboard) => Some(Action::CardLeft),
            (MouseEventKind::ScrollDown, View::Dashboard) => Some(Action::CardRight),
            (MouseEventKind::ScrollUp, View::Signals) => Some(Action::PrevTool),
            (MouseEventKind::ScrollDown, View::Signals) => Some(Action::NextTool),
            (MouseEventKind::ScrollUp, View::Trading) => Some(Action::TradingParamPrev),
            (MouseEventKind::ScrollDown, View::Trading) => Some(Action::TradingParamNext),
            _ => None,
        }
    }

    fn handle_dashboard(&self, input: InputEvent) -> Option<Action> {
        if input.matches("Left") || input.matches("h") {
            return Some(Action::CardLeft);
        }
        if input.matches("Right") || input.matches("l") {
            return Some(Action::CardRight);
        }
        if input.matches(&self.keybindings.select) {
            return Some(Action::ActivateCard);
        }
        None
    }

    fn handle_signals(&self, input: InputEvent, store: &Store) -> Option<Action> {
        if input.matches(&self.keybindings.next_tool) {
            return Some(Action::NextTool);
        }
        if input.matches(&self.keybindings.prev_tool) {
            return Some(Action::PrevTool);
        }
        // Retry and open-externally are only offered from the error state.
        if store.embed.has_error {
            if input.matches(&self.keybindings.retry) {
                return Some(Action::RetryEmbed);
            }
            if input.matches(&self.keybindings.open_external) {
                return Some(Action::OpenExternal);
            }
        }
        None
    }

    fn handle_trading(&self, input: InputEvent, store: &Store) -> Option<Action> {
        if input.matches(&self.keybindings.toggle_trading) {
            return Some(if store.trading.is_running() {
                Action::StopTrading
            } else {
                Action::StartTrading
            });
        }
        if input.matches("Up") || input.matches("k") {
            return Some(Action::TradingParamPrev);
        }
        if input.matches("Down") || input.matches("j") {
            return Some(Action::TradingParamNext);
        }
        if input.matches("Left") || input.matches("h") {
            return Some(Action::TradingParamDecrease);
        }
        if input.matches("Right") || input.matches("l") {
            return Some(Action::TradingParamIncrease);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Tool, ToolCatalog};
    use crate::config::{BannerConfig, UiConfig};
    use crate::state::BannerState;
    use crate::storage::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tokio::sync::mpsc;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let catalog = ToolCatalog::from_entries(vec![
            Tool::new("A", "Tool A", "https://a.example"),
            Tool::new("B", "Tool B", "https://b.example"),
        ]);
        let banner = BannerState::restore(&MemoryStore::new(), &BannerConfig::default(), 250);
        let mut store = Store::new(tx, catalog, UiConfig::default(), banner);
        store.reduce(Action::SetView(View::Signals));
        store
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycles_tools() {
        let handler = EventHandler::new(KeyBindings::default());
        let store = store();
        let action = handler.handle_key(press(KeyCode::Tab), &store);
        assert!(matches!(action, Some(Action::NextTool)));
    }

    #[test]
    fn test_trading_toggle_follows_run_state() {
        let handler = EventHandler::new(KeyBindings::default());
        let mut store = store();
        store.reduce(Action::SetView(View::Trading));

        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('s')), &store),
            Some(Action::StartTrading)
        ));
        store.reduce(Action::StartTrading);
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('s')), &store),
            Some(Action::StopTrading)
        ));
    }

    #[test]
    fn test_trading_param_keys() {
        let handler = EventHandler::new(KeyBindings::default());
        let mut store = store();
        store.reduce(Action::SetView(View::Trading));

        assert!(matches!(
            handler.handle_key(press(KeyCode::Down), &store),
            Some(Action::TradingParamNext)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Right), &store),
            Some(Action::TradingParamIncrease)
        ));
    }

    #[test]
    fn test_retry_key_ignored_outside_error_state() {
        let handler = EventHandler::new(KeyBindings::default());
        let mut store = store();
        assert!(handler.handle_key(press(KeyCode::Char('r')), &store).is_none());

        let token = store.embed.reload_token;
        store.reduce(Action::EmbedFailed {
            token,
            reason: "refused".into(),
        });
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('r')), &store),
            Some(Action::RetryEmbed)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('o')), &store),
            Some(Action::OpenExternal)
        ));
    }

    #[test]
    fn test_banner_keys_only_while_visible() {
        let handler = EventHandler::new(KeyBindings::default());
        let mut store = store();
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('d')), &store),
            Some(Action::DismissBanner)
        ));

        store.reduce(Action::DismissBanner);
        assert!(handler.handle_key(press(KeyCode::Char('d')), &store).is_none());
    }

    #[test]
    fn test_dismiss_key_ignored_when_banner_undismissable() {
        let handler = EventHandler::new(KeyBindings::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let catalog = ToolCatalog::default();
        let cfg = BannerConfig {
            can_close: false,
            ..Default::default()
        };
        let banner = BannerState::restore(&MemoryStore::new(), &cfg, 250);
        let store = Store::new(tx, catalog, UiConfig::default(), banner);

        assert!(store.banner.visible);
        assert!(handler.handle_key(press(KeyCode::Char('d')), &store).is_none());
        // The community link stays available.
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('t')), &store),
            Some(Action::OpenBannerLink)
        ));
    }

    #[test]
    fn test_help_overlay_swallows_other_keys() {
        let handler = EventHandler::new(KeyBindings::default());
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        assert!(handler.handle_key(press(KeyCode::Tab), &store).is_none());
        assert!(matches!(
            handler.handle_key(press(KeyCode::Esc), &store),
            Some(Action::ToggleHelp)
        ));
    }
}
