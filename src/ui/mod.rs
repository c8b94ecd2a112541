//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

pub mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{Banner, Cards, EmbedPane, HelpPanel, StatusBar, TabBar, ToolBar, Trading};

use crate::state::{Store, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout};

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area(), store.banner.visible);

        StatusBar::render(frame, layout.status_area, store);

        if store.banner.visible {
            Banner::render(frame, layout.banner_area, store);
        }

        TabBar::render(frame, layout.tab_area, store);

        match store.app.current_view {
            View::Dashboard => {
                Cards::render(frame, layout.main_area, store);
            }
            View::Signals => {
                // Tool selector row, then the embed pane at its computed
                // height (clamped to what the terminal actually has).
                let pane_height = store.embed.computed_height.min(
                    layout.main_area.height.saturating_sub(1),
                );
                let chunks = RatatuiLayout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(pane_height),
                        Constraint::Min(0),
                    ])
                    .split(layout.main_area);

                ToolBar::render(frame, chunks[0], store);
                EmbedPane::render(frame, chunks[1], store);
            }
            View::Trading => {
                Trading::render(frame, layout.main_area, store);
            }
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }
    }
}
