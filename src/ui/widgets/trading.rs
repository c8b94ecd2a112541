//! Automated trading controls view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{Store, TRADING_PARAMS, TradingParam};

/// Automated trading controls panel.
pub struct Trading;

impl Trading {
    /// Render the trading controls.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let trading = &store.trading;
        let running = trading.is_running();

        let block = Block::default()
            .title(" Automated Trading Controls ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (status_label, status_color) = if running {
            ("Running", Color::Green)
        } else {
            ("Stopped", Color::Red)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(" Status: "),
                Span::styled(
                    status_label,
                    Style::default()
                        .fg(status_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    if running {
                        "   [s] stop"
                    } else {
                        "   [s] start"
                    },
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " Trading Parameters",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for (i, param) in TRADING_PARAMS.iter().enumerate() {
            let selected = i == trading.selected_param;
            let marker = if selected { " ▸ " } else { "   " };
            let (label, value) = match param {
                TradingParam::MaxTrades => {
                    ("Max trades per session", trading.max_trades.to_string())
                }
                TradingParam::StopLoss => ("Stop loss (%)", format!("{:.1}", trading.stop_loss)),
                TradingParam::TakeProfit => {
                    ("Take profit (%)", format!("{:.1}", trading.take_profit))
                }
                TradingParam::TradeAmount => {
                    ("Trade amount", format!("{:.1}", trading.trade_amount))
                }
            };
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{label:<24}"), style),
                Span::styled(value, style),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Active Strategies",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        if trading.active_strategies.is_empty() {
            lines.push(Line::from(Span::styled(
                "   No active strategies. Create strategies in Bot Builder.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for name in &trading.active_strategies {
                lines.push(Line::from(format!("   {name}")));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " ↑/↓ select parameter   ←/→ adjust",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
