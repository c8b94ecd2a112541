//! Tool selector bar.
//!
//! Wide terminals get one control per tool with the selection highlighted;
//! below the configured width threshold the bar collapses to a single
//! compact control showing the current tool and its position.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;
use crate::ui::layout::is_compact;

/// Tool selector widget.
pub struct ToolBar;

impl ToolBar {
    /// Render the tool selector.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let line = if is_compact(store.app.viewport.0, store.ui.compact_width) {
            Self::compact_line(store)
        } else {
            Self::full_line(store)
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn compact_line(store: &Store) -> Line<'_> {
        let tool = store.current_tool();
        let pos = store.catalog.position(&tool.id).unwrap_or(0);
        Line::from(vec![
            Span::raw(" "),
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                &tool.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({}/{})", pos + 1, store.catalog.len()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ])
    }

    fn full_line(store: &Store) -> Line<'_> {
        let mut spans = vec![Span::raw(" ")];
        for tool in store.catalog.tools() {
            let is_selected = tool.id == store.embed.selected_tool_id;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", tool.title), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            " Tab/BackTab to switch",
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    }
}
