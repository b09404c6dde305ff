use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use foodmatch::catalog;
use foodmatch::logic::formatting::join_tags;
use foodmatch::logic::ui::swipe_offset;
use foodmatch::model::types::Candidate;
use foodmatch::model::FeedModel;

use super::layout::centered_rect;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 12;

/// Card rect shifted horizontally by `offset`, kept inside `area`
pub fn card_area(area: Rect, offset: i32) -> Rect {
    let base = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
    let max_x = i32::from(area.x + area.width - base.width);
    let x = (i32::from(base.x) + offset).clamp(i32::from(area.x), max_x);
    Rect {
        x: x as u16,
        ..base
    }
}

/// The two banner lines shown after a match
pub fn banner_lines(name: &str) -> [String; 2] {
    ["It's a match!".to_string(), format!("You matched with {}", name)]
}

fn card_lines(candidate: &Candidate) -> Vec<Line<'static>> {
    let cuisines = join_tags(
        candidate
            .cuisines
            .iter()
            .filter_map(|id| catalog::cuisine(*id))
            .map(|c| c.name),
    );

    let mut lines = vec![
        Line::from(Span::styled(
            cuisines,
            Style::default().fg(Color::Yellow),
        )),
        Line::raw(""),
        Line::raw(candidate.description.clone()),
    ];
    if let Some(photo) = candidate.photos.first() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("📷 {}", photo),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

pub fn render_feed(f: &mut Frame, area: Rect, feed: &FeedModel) {
    let Some(candidate) = feed.current_candidate() else {
        let empty = Paragraph::new("No one around right now")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let direction = feed.sequencer.direction();
    let card = card_area(area, swipe_offset(direction, area.width));

    let border_color = match direction {
        Some(d) if d.offset() > 0 => Color::Green,
        Some(_) => Color::Red,
        None => Color::White,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", candidate.heading()),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    f.render_widget(
        Paragraph::new(card_lines(candidate))
            .block(block)
            .wrap(Wrap { trim: true }),
        card,
    );

    if let Some(matched) = feed.matched_candidate() {
        render_match_banner(f, area, &matched.name);
    }
}

fn render_match_banner(f: &mut Frame, area: Rect, name: &str) {
    let [title, subtitle] = banner_lines(name);
    let banner_area = centered_rect(area, (subtitle.len() as u16 + 8).max(24), 4);

    f.render_widget(Clear, banner_area);
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(subtitle),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(banner, banner_area);
}
