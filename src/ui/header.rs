use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use foodmatch::model::session::Session;
use foodmatch::Route;

/// Title bar spans: app name, current screen, signed-in user
pub fn build_header_spans(route: Route, session: &Session) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            "🍝 foodmatch",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(route.label(), Style::default().fg(Color::Cyan)),
    ];

    match session.user() {
        Some(user) => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("🟢 {} via {}", user.display_name, user.method.as_str()),
                Style::default().fg(Color::Green),
            ));
        }
        None => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "Not signed in",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    spans
}

pub fn render_header(f: &mut Frame, area: Rect, route: Route, session: &Session) {
    let header = Paragraph::new(Line::from(build_header_spans(route, session)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodmatch::model::session::{AuthMethod, SessionUser};

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_shows_user() {
        let mut session = Session::new();
        assert!(text(&build_header_spans(Route::Auth, &session)).ends_with("Not signed in"));

        session.begin(SessionUser {
            display_name: "ann@example.com".to_string(),
            method: AuthMethod::Password,
        });
        let header = text(&build_header_spans(Route::Chat, &session));
        assert!(header.contains("Chats"));
        assert!(header.contains("ann@example.com via password"));
    }
}
