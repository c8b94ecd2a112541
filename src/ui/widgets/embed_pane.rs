//! Embedded viewer pane.
//!
//! Rendering policy per phase:
//! - loading: the pane chrome stays mounted with its content hidden and a
//!   non-blocking badge overlaid, so a finished load appears without a
//!   blank-then-populated flash.
//! - failed: no content; an explanation plus retry / open-externally hints.
//! - ready: the content snapshot, badge gone.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{EmbedPhase, Store};

/// Embedded viewer pane.
pub struct EmbedPane;

impl EmbedPane {
    /// Render the embed pane.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let tool = store.current_tool();

        let block = Block::default()
            .title(format!(" {} · {} ", tool.title, tool.src))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(match store.embed.phase() {
                EmbedPhase::Failed => Color::Red,
                _ => Color::Cyan,
            }));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match store.embed.phase() {
            EmbedPhase::Loading => {
                // Content hidden, badge overlaid in the top-left corner.
                let badge_area = Rect {
                    x: inner.x.saturating_add(1),
                    y: inner.y,
                    width: inner.width.saturating_sub(2),
                    height: 1.min(inner.height),
                };
                let badge = Paragraph::new(Line::from(Span::styled(
                    format!(" Loading {}... ", tool.title),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::ITALIC),
                )));
                frame.render_widget(badge, badge_area);
            }
            EmbedPhase::Failed => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Unable to embed this tool",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::raw(
                        "Some sites prevent embedding (frame-ancestors or similar \
                         restrictions). You can open the tool in your browser instead.",
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("[o]", Style::default().fg(Color::Cyan)),
                        Span::raw(format!(" Open {} externally   ", tool.title)),
                        Span::styled("[r]", Style::default().fg(Color::Cyan)),
                        Span::raw(" Retry"),
                    ]),
                ];
                let paragraph = Paragraph::new(lines)
                    .alignment(ratatui::layout::Alignment::Center)
                    .wrap(ratatui::widgets::Wrap { trim: true });
                frame.render_widget(paragraph, inner);
            }
            EmbedPhase::Ready => {
                let mut lines = Vec::new();
                if let Some(content) = &store.embed.content {
                    if let Some(title) = &content.title {
                        lines.push(Line::from(Span::styled(
                            title.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )));
                        lines.push(Line::from(""));
                    }
                    lines.push(Line::from(vec![
                        Span::styled("URL     ", Style::default().fg(Color::DarkGray)),
                        Span::raw(content.final_url.clone()),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled("Status  ", Style::default().fg(Color::DarkGray)),
                        Span::raw(content.status.to_string()),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled("Size    ", Style::default().fg(Color::DarkGray)),
                        Span::raw(format!("{} bytes", content.bytes)),
                    ]));
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "Live snapshot of the embedded tool.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                let paragraph =
                    Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false });
                frame.render_widget(paragraph, inner);
            }
        }
    }
}
