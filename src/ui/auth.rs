use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use foodmatch::logic::formatting::mask_secret;
use foodmatch::model::auth::{AuthField, AuthMode};
use foodmatch::model::AuthModel;

use super::layout::{centered_rect, input_cursor_x};

pub fn submit_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Log in",
        AuthMode::Register => "Register",
    }
}

pub fn toggle_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "No account? Register",
        AuthMode::Register => "Have an account? Log in",
    }
}

fn field<'a>(title: &'a str, value: String, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border),
    )
}

fn action_line(label: &'static str, focused: bool, color: Color) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Line::from(Span::styled(format!(" {} ", label), style)).alignment(Alignment::Center)
}

pub fn render_auth(f: &mut Frame, area: Rect, auth: &AuthModel) {
    let form = centered_rect(area, 48, 16);
    let title = match auth.mode {
        AuthMode::Login => " Sign in ",
        AuthMode::Register => " Create account ",
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title);
    let inner = outer.inner(form);
    f.render_widget(outer, form);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Submit
            Constraint::Length(1), // Mode toggle
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Google
            Constraint::Length(1), // Facebook
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        field(
            " Email ",
            auth.email.as_str().to_string(),
            auth.focus == AuthField::Email,
        ),
        rows[0],
    );
    f.render_widget(
        field(
            " Password ",
            mask_secret(auth.password.as_str()),
            auth.focus == AuthField::Password,
        ),
        rows[1],
    );

    let actions = [
        (rows[2], submit_label(auth.mode), AuthField::Submit, Color::Green),
        (rows[3], toggle_label(auth.mode), AuthField::ToggleMode, Color::Gray),
        (rows[5], "Continue with Google", AuthField::Google, Color::Red),
        (rows[6], "Continue with Facebook", AuthField::Facebook, Color::Blue),
    ];
    for (row, label, item, color) in actions {
        f.render_widget(
            Paragraph::new(action_line(label, auth.focus == item, color)),
            row,
        );
    }

    let cursor_row = match auth.focus {
        AuthField::Email => Some((rows[0], auth.email.as_str().chars().count())),
        AuthField::Password => Some((rows[1], auth.password.as_str().chars().count())),
        _ => None,
    };
    if let Some((row, len)) = cursor_row {
        f.set_cursor_position((input_cursor_x(row, len), row.y + 1));
    }
}
