//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::config::Config;
use crate::embed::{EmbedSignal, EmbedSurface, HttpSurface, open_external};
use crate::error::Result;
use crate::events::{AppEvent, Event, EventConfig, EventHandler, EventLoop};
use crate::state::{Action, BannerState, CardAction, Store};
use crate::storage::{BANNER_DISMISSED_KEY, FileStore, KvStore, MemoryStore};
use crate::ui::Ui;
use crate::ToolCatalog;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The main application.
///
/// Owns its ViewState exclusively; scheduled work (the event loop task and
/// the one-shot settle timer) is registered on startup and released on
/// teardown.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Event receiver.
    event_rx: mpsc::UnboundedReceiver<Event>,
    /// Event loop task handle.
    event_task: JoinHandle<()>,
    /// Event sender (settle timer, embed surface).
    event_tx: mpsc::UnboundedSender<Event>,
    /// The embed surface.
    surface: Box<dyn EmbedSurface>,
    /// Injected persistence for banner dismissal.
    kv: Box<dyn KvStore>,
    /// Pending one-shot post-mount settle timer.
    settle_timer: Option<JoinHandle<()>>,
    /// Settle delay from config.
    settle_delay: Duration,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Start the event loop
        let event_loop = EventLoop::new(
            EventConfig::default().with_tick_rate_ms(config.ui.tick_rate_ms),
        );
        let event_tx = event_loop.sender();
        let (event_rx, event_task) = event_loop.start();

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Banner dismissal persistence, scoped per config.
        let kv: Box<dyn KvStore> = if config.banner.durable_dismissal {
            Box::new(FileStore::open_default()?)
        } else {
            Box::new(MemoryStore::new())
        };
        let banner = BannerState::restore(kv.as_ref(), &config.banner, config.ui.tick_rate_ms);

        let catalog = ToolCatalog::from_entries(config.tools.clone());
        let store = Store::new(action_tx, catalog, config.ui.clone(), banner);

        let event_handler = EventHandler::new(config.keybindings.clone());
        let surface = Box::new(HttpSurface::new(
            event_tx.clone(),
            config.ui.embed_timeout_secs,
        )?);

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            event_rx,
            event_task,
            event_tx,
            surface,
            kv,
            settle_timer: None,
            settle_delay: Duration::from_millis(config.ui.settle_delay_ms),
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Seed geometry from real terminal metrics, then request the first
        // mount of the default tool.
        let size = self.terminal.size()?;
        self.store
            .reduce(Action::ViewportResized(size.width, size.height));
        self.mount_current();

        loop {
            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event)?;
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
                else => break,
            }

            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal or app event.
    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Tick => {
                self.store.reduce(Action::Tick);
                self.persist_banner_if_needed();
            }
            // Input-derived actions go through the action channel and are
            // picked up by the select loop.
            Event::Key(key) => {
                if let Some(action) = self.event_handler.handle_key(key, &self.store) {
                    self.store.dispatch(action)?;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(action) = self.event_handler.handle_mouse(mouse, &self.store) {
                    self.store.dispatch(action)?;
                }
            }
            Event::Resize(cols, rows) => {
                self.store.reduce(Action::ViewportResized(cols, rows));
            }
            Event::App(AppEvent::Embed(signal)) => {
                let action = match signal {
                    EmbedSignal::Loaded { token, content } => {
                        Action::EmbedLoaded { token, content }
                    }
                    EmbedSignal::Failed { token, reason } => {
                        Action::EmbedFailed { token, reason }
                    }
                };
                self.store.reduce(action);
            }
            Event::App(AppEvent::SettleElapsed) => {
                // Terminals can report a stale size right after the
                // alternate screen flips; re-read and recompute once.
                if let Ok(size) = self.terminal.size() {
                    self.store
                        .reduce(Action::ViewportResized(size.width, size.height));
                }
                self.store.reduce(Action::RecomputeGeometry);
            }
        }
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) -> Result<()> {
        // Tool selection and retry may require a fresh mount.
        if let Some(remounted) =
            apply_embed_action(&mut self.store, self.surface.as_ref(), &action)
        {
            if remounted {
                self.arm_settle_timer();
            }
            return Ok(());
        }

        match action {
            Action::OpenExternal => {
                let url = self.store.current_tool().src.clone();
                if let Err(e) = open_external(&url) {
                    tracing::warn!(%url, error = %e, "failed to open browser");
                }
            }
            Action::OpenBannerLink => {
                let url = self.store.banner.link_url.clone();
                if let Err(e) = open_external(&url) {
                    tracing::warn!(%url, error = %e, "failed to open browser");
                }
            }
            Action::ActivateCard => match self.store.app.selected_card().action {
                CardAction::OpenView(view) => self.store.reduce(Action::SetView(view)),
                CardAction::OpenUrl(url) => {
                    if let Err(e) = open_external(url) {
                        tracing::warn!(url, error = %e, "failed to open browser");
                    }
                }
            },
            other => {
                self.store.reduce(other);
                self.persist_banner_if_needed();
            }
        }

        Ok(())
    }

    /// Request a mount of the currently selected tool and schedule the
    /// post-mount geometry settle.
    fn mount_current(&mut self) {
        let tool = self.store.current_tool().clone();
        self.surface.mount(&tool, self.store.embed.reload_token);
        self.arm_settle_timer();
    }

    /// (Re-)arm the one-shot settle timer. Any previous pending timer is
    /// cancelled first; only one can be outstanding.
    fn arm_settle_timer(&mut self) {
        if let Some(timer) = self.settle_timer.take() {
            timer.abort();
        }
        let tx = self.event_tx.clone();
        let delay = self.settle_delay;
        self.settle_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Event::App(AppEvent::SettleElapsed));
        }));
    }

    /// Write through a pending banner dismissal.
    fn persist_banner_if_needed(&mut self) {
        if self.store.banner.take_pending_persist() {
            if let Err(e) = self.kv.set(BANNER_DISMISSED_KEY, "1") {
                tracing::warn!(error = %e, "failed to persist banner dismissal");
            }
        }
    }
}

/// Apply a tool-selection or retry action, requesting a mount when the
/// transition calls for one.
///
/// Returns `None` when the action is not an embed action, otherwise whether
/// a mount was requested.
fn apply_embed_action(
    store: &mut Store,
    surface: &dyn EmbedSurface,
    action: &Action,
) -> Option<bool> {
    let remount = match action {
        Action::SelectTool(id) => store.select_tool(id),
        Action::NextTool => store.select_next_tool(),
        Action::PrevTool => store.select_prev_tool(),
        Action::RetryEmbed => store.retry_embed(),
        _ => return None,
    };
    if remount {
        let token = store.embed.reload_token;
        let tool = store.current_tool().clone();
        surface.mount(&tool, token);
    }
    Some(remount)
}

impl Drop for App {
    fn drop(&mut self) {
        // Release scheduled work, then restore terminal state.
        if let Some(timer) = self.settle_timer.take() {
            timer.abort();
        }
        self.event_task.abort();
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
