//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Notification banner area (zero-height when hidden).
    pub banner_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, banner_visible: bool) -> Self {
        let banner_rows = u16::from(banner_visible);
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Status bar
                Constraint::Length(banner_rows), // Banner marquee
                Constraint::Length(1),           // Tab bar
                Constraint::Min(0),              // Main content
            ])
            .split(area);

        Self {
            status_area: chunks[0],
            banner_area: chunks[1],
            tab_area: chunks[2],
            main_area: chunks[3],
        }
    }
}

/// Height of the embed pane given the viewport and the rows above the pane.
///
/// `max(min_height, viewport - top_offset - bottom_margin)`: the pane never
/// collapses to zero or negative height and always leaves the bottom margin
/// visible when space allows. Unit-agnostic; the app passes terminal rows.
pub fn embed_height(viewport: u16, top_offset: u16, min_height: u16, bottom_margin: u16) -> u16 {
    let available =
        i32::from(viewport) - i32::from(top_offset) - i32::from(bottom_margin);
    available.max(i32::from(min_height)) as u16
}

/// Whether the tool selector should collapse to its compact form.
pub fn is_compact(viewport_cols: u16, threshold: u16) -> bool {
    viewport_cols < threshold
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
