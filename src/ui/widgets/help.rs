//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |name: &'static str| {
            Line::from(vec![Span::styled(
                name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |key: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Cyan)),
                Span::raw(text),
            ])
        };

        let help_text = vec![
            section("Views"),
            Line::from(""),
            entry("  1     ", "Dashboard"),
            entry("  2     ", "Signals"),
            entry("  3     ", "Trading"),
            Line::from(""),
            section("Dashboard"),
            Line::from(""),
            entry("  ←/→   ", "Select a card"),
            entry("  Enter ", "Open the selected card"),
            Line::from(""),
            section("Signals"),
            Line::from(""),
            entry("  Tab   ", "Next tool"),
            entry("  BackTab", " Previous tool"),
            entry("  r     ", "Retry a failed embed"),
            entry("  o     ", "Open the tool in your browser (after a failure)"),
            Line::from(""),
            section("Trading"),
            Line::from(""),
            entry("  s     ", "Start or stop auto trading"),
            entry("  ↑/↓   ", "Select a parameter"),
            entry("  ←/→   ", "Adjust the selected parameter"),
            Line::from(""),
            section("Banner"),
            Line::from(""),
            entry("  d     ", "Dismiss the notification banner"),
            entry("  t     ", "Open the community link"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry("  ?     ", "Toggle help"),
            entry("  q     ", "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}
