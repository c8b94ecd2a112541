//! Notification banner marquee.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;

/// Scrolling notification banner.
pub struct Banner;

impl Banner {
    /// Render the banner row.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let hint = if store.banner.can_close {
            " [t] join  [d] dismiss "
        } else {
            " [t] join "
        };
        let text_width = area.width.saturating_sub(hint.len() as u16) as usize;

        let window = marquee_window(&store.banner.message, store.banner.offset, text_width);

        let line = Line::from(vec![
            Span::styled(
                window,
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Yellow));
        frame.render_widget(paragraph, area);
    }
}

/// A fixed-width window into the message, scrolled by `offset` and wrapping
/// seamlessly (the message is conceptually repeated with a separator).
pub(crate) fn marquee_window(message: &str, offset: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let chars: Vec<char> = message.chars().chain("   •   ".chars()).collect();
    if chars.is_empty() {
        return " ".repeat(width);
    }
    let start = offset % chars.len();
    (0..width)
        .map(|i| chars[(start + i) % chars.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_window_is_exactly_requested_width() {
        let window = marquee_window("signals", 0, 20);
        assert_eq!(window.chars().count(), 20);
    }

    #[test]
    fn test_window_scrolls_and_wraps() {
        assert_eq!(marquee_window("abc", 0, 3), "abc");
        assert_eq!(marquee_window("abc", 1, 3), "bc ");
        // Offset past one full cycle lands back at the start.
        let cycle = "abc".chars().count() + "   •   ".chars().count();
        assert_eq!(marquee_window("abc", cycle, 3), "abc");
    }

    #[test]
    fn test_zero_width_window() {
        assert_eq!(marquee_window("abc", 5, 0), "");
    }
}
