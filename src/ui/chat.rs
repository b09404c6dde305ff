use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use foodmatch::logic::formatting::{truncate_to_width, unread_badge};
use foodmatch::model::chat::ChatFocus;
use foodmatch::model::types::{ChatThread, Message, Sender};
use foodmatch::model::ChatModel;
use unicode_width::UnicodeWidthStr;

use super::layout::input_cursor_x;

const EMPTY_PANE: &str = "Select a chat to start messaging";

/// Lines for one message bubble
///
/// Own messages hug the right edge, the counterpart's the left. An attached
/// image is shown as a line above the text.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let (alignment, color) = match message.sender {
        Sender::Me => (Alignment::Right, Color::Cyan),
        Sender::Other => (Alignment::Left, Color::White),
    };

    let mut lines = Vec::new();
    if let Some(image) = &message.image {
        lines.push(
            Line::from(Span::styled(
                format!("🖼 {}", image),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(alignment),
        );
    }
    lines.push(
        Line::from(vec![
            Span::styled(message.text.clone(), Style::default().fg(color)),
            Span::styled(
                format!("  {}", message.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(alignment),
    );
    lines
}

fn thread_item(thread: &ChatThread, width: usize) -> ListItem<'static> {
    let mut header = vec![Span::styled(
        thread.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let badge = unread_badge(thread.unread);
    if !badge.is_empty() {
        header.push(Span::styled(
            format!(" {}", badge),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(ts) = thread.last_timestamp() {
        header.push(Span::styled(
            format!("  {}", ts),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            truncate_to_width(&thread.last_message, width),
            Style::default().fg(Color::Gray),
        )),
    ])
}

pub fn render_chat(f: &mut Frame, area: Rect, chat: &ChatModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let list_focused = chat.focus == ChatFocus::List;
    let preview_width = chunks[0].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = chat
        .threads
        .iter()
        .map(|t| thread_item(t, preview_width))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Chats ")
                .border_style(focus_style(list_focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(chat.cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let Some(thread) = chat.current_thread() else {
        let empty = Paragraph::new(EMPTY_PANE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[1]);
        return;
    };

    let pane = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(chunks[1]);

    let lines: Vec<Line> = thread.messages.iter().flat_map(message_lines).collect();
    // Keep the newest messages in view
    let visible = pane[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    let messages = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", thread.name)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(messages, pane[0]);

    let composer_focused = chat.focus == ChatFocus::Composer;
    let input = Paragraph::new(chat.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(focus_style(composer_focused)),
    );
    f.render_widget(input, pane[1]);

    if composer_focused {
        let x = input_cursor_x(pane[1], chat.input.as_str().width());
        f.set_cursor_position((x, pane[1].y + 1));
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodmatch::model::types::MessageId;

    fn message(sender: Sender, image: Option<&str>) -> Message {
        Message {
            id: MessageId(1),
            text: "Hi".to_string(),
            sender,
            timestamp: "12:30".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_own_messages_right_aligned() {
        let lines = message_lines(&message(Sender::Me, None));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));

        let lines = message_lines(&message(Sender::Other, None));
        assert_eq!(lines[0].alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_image_line_above_text() {
        let lines = message_lines(&message(Sender::Other, Some("https://img/x.jpg")));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].to_string().contains("https://img/x.jpg"));
        assert!(lines[1].to_string().starts_with("Hi"));
    }
}
