use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Top title bar area
    pub header_area: Rect,
    /// Active screen
    pub content_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom navigation bar (hidden on the auth screen)
    pub nav_area: Option<Rect>,
}

/// Calculate the screen layout
pub fn calculate_layout(terminal_size: Rect, show_nav: bool) -> LayoutInfo {
    let nav_height = if show_nav { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Title bar (border, text, border)
            Constraint::Min(3),             // Screen content
            Constraint::Length(3),          // Legend
            Constraint::Length(nav_height), // Navigation bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        content_area: chunks[1],
        legend_area: chunks[2],
        nav_area: show_nav.then_some(chunks[3]),
    }
}

/// Rect of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cursor column for a one-line bordered input holding `columns` of text
///
/// Stays inside the border however long the text gets.
pub fn input_cursor_x(area: Rect, columns: usize) -> u16 {
    let columns = u16::try_from(columns).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(columns)
        .min(area.right().saturating_sub(2))
}
