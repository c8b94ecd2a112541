//! Dashboard launch cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{LAUNCH_CARDS, Store};

/// Launch card grid.
pub struct Cards;

impl Cards {
    /// Render the card row plus a hint line.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let hint = Paragraph::new(Line::from(Span::styled(
            " ←/→ select a card, Enter to open",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hint, rows[0]);

        let constraints: Vec<Constraint> = LAUNCH_CARDS
            .iter()
            .map(|_| Constraint::Ratio(1, LAUNCH_CARDS.len() as u32))
            .collect();
        let tiles = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[1]);

        for (i, card) in LAUNCH_CARDS.iter().enumerate() {
            let selected = store.app.selected_card == i;
            let border_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(tiles[i]);
            frame.render_widget(block, tiles[i]);

            let label_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let content = vec![
                Line::from(""),
                Line::from(Span::raw(card.glyph)),
                Line::from(""),
                Line::from(Span::styled(card.label, label_style)),
            ];
            let paragraph =
                Paragraph::new(content).alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(paragraph, inner);
        }
    }
}
