//! Application-level state.

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Signals,
    Trading,
}

/// What a dashboard card does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Switch to a view.
    OpenView(View),
    /// Open a URL in the system browser.
    OpenUrl(&'static str),
}

/// A dashboard launch card.
#[derive(Debug, Clone, Copy)]
pub struct LaunchCard {
    pub id: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
    pub action: CardAction,
}

/// The fixed launch card list, in display order.
pub const LAUNCH_CARDS: &[LaunchCard] = &[
    LaunchCard {
        id: "signal-tools",
        glyph: "📡",
        label: "Signal tools",
        action: CardAction::OpenView(View::Signals),
    },
    LaunchCard {
        id: "bot-builder",
        glyph: "🤖",
        label: "Bot builder",
        action: CardAction::OpenUrl("https://app.botdeck.io/builder"),
    },
    LaunchCard {
        id: "quick-strategy",
        glyph: "⚡",
        label: "Quick strategy",
        action: CardAction::OpenUrl("https://app.botdeck.io/quick-strategy"),
    },
    LaunchCard {
        id: "community",
        glyph: "💬",
        label: "Community",
        action: CardAction::OpenUrl("https://t.me/botdeck"),
    },
];

/// Global application state.
#[derive(Debug)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal size (columns, rows).
    pub viewport: (u16, u16),
    /// Selected dashboard card index.
    pub selected_card: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::Dashboard,
            show_help: false,
            should_quit: false,
            viewport: (80, 24),
            selected_card: 0,
        }
    }
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected launch card.
    pub fn selected_card(&self) -> &'static LaunchCard {
        &LAUNCH_CARDS[self.selected_card.min(LAUNCH_CARDS.len() - 1)]
    }

    /// Move card selection, wrapping around.
    pub fn move_card_selection(&mut self, delta: i32) {
        let len = LAUNCH_CARDS.len() as i32;
        let current = self.selected_card as i32;
        self.selected_card = ((current + delta).rem_euclid(len)) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_selection_wraps_both_ways() {
        let mut state = AppState::new();
        state.move_card_selection(-1);
        assert_eq!(state.selected_card, LAUNCH_CARDS.len() - 1);
        state.move_card_selection(1);
        assert_eq!(state.selected_card, 0);
    }
}
