use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use foodmatch::Route;

/// Tab spans for the bottom navigation bar, active route highlighted
pub fn build_nav_spans(active: Route) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (idx, route) in Route::TABS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let label = format!("{} {}", idx + 1, route.label());
        let style = if *route == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }
    spans
}

pub fn render_nav_bar(f: &mut Frame, area: Rect, active: Route) {
    let bar = Paragraph::new(Line::from(build_nav_spans(active)))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_highlighted() {
        let spans = build_nav_spans(Route::Chat);
        let active: Vec<_> = spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Cyan))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].content, "3 Chats");
    }

    #[test]
    fn test_all_tabs_listed_in_order() {
        let text: String = build_nav_spans(Route::Feed)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "1 Feed │ 2 Search │ 3 Chats │ 4 Profile");
    }
}
