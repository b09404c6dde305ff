use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foodmatch::catalog::CUISINES;
use foodmatch::logic::formatting::join_tags;
use foodmatch::model::profile::ProfileSection;
use foodmatch::model::ProfileModel;
use unicode_width::UnicodeWidthStr;

use super::layout::input_cursor_x;

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

/// Cuisine toggles on one line, the cursor's entry underlined when focused
pub fn cuisine_spans(profile: &ProfileModel, focused: bool) -> Vec<Span<'static>> {
    CUISINES
        .iter()
        .enumerate()
        .map(|(idx, cuisine)| {
            let selected = profile.draft.cuisines.contains(cuisine.id);
            let mut style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            if focused && idx == profile.cuisine_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            Span::styled(format!(" {} ", cuisine.name), style)
        })
        .collect()
}

/// Section title with the current favourites
pub fn cuisines_title(profile: &ProfileModel) -> String {
    let names = profile.draft.cuisine_names();
    if names.is_empty() {
        " Favourite cuisines ".to_string()
    } else {
        format!(" Favourite cuisines: {} ", join_tags(names))
    }
}

fn button(label: &'static str, focused: bool, color: Color) -> Paragraph<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Paragraph::new(Span::styled(label, style))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

pub fn render_profile(f: &mut Frame, area: Rect, profile: &ProfileModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Photos
            Constraint::Length(3), // Add photos input
            Constraint::Length(4), // Cuisines
            Constraint::Min(4),    // Description
            Constraint::Length(3), // Buttons
        ])
        .split(area);

    let section = profile.section;

    // Photos
    let photos_focused = section == ProfileSection::Photos;
    let photo_lines: Vec<Line> = if profile.draft.photos.is_empty() {
        vec![Line::from(Span::styled(
            "No photos yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        profile
            .draft
            .photos
            .iter()
            .enumerate()
            .map(|(idx, photo)| {
                let marker = if idx == profile.photo_cursor { "> " } else { "  " };
                let style = if photos_focused && idx == profile.photo_cursor {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{}{}", marker, photo), style))
            })
            .collect()
    };
    let title = format!(" Photos ({}) ", profile.draft.photos.len());
    f.render_widget(
        Paragraph::new(photo_lines).block(section_block(&title, photos_focused)),
        chunks[0],
    );

    // Add photos
    let input_focused = section == ProfileSection::AddPhoto;
    f.render_widget(
        Paragraph::new(profile.photo_input.as_str())
            .block(section_block(" Add photos (path or glob) ", input_focused)),
        chunks[1],
    );
    if input_focused {
        let x = input_cursor_x(chunks[1], profile.photo_input.as_str().width());
        f.set_cursor_position((x, chunks[1].y + 1));
    }

    // Cuisines
    let cuisines_focused = section == ProfileSection::Cuisines;
    f.render_widget(
        Paragraph::new(Line::from(cuisine_spans(profile, cuisines_focused)))
            .wrap(Wrap { trim: false })
            .block(section_block(&cuisines_title(profile), cuisines_focused)),
        chunks[2],
    );

    // Description
    let description_focused = section == ProfileSection::Description;
    f.render_widget(
        Paragraph::new(profile.draft.description.as_str())
            .wrap(Wrap { trim: false })
            .block(section_block(" About me ", description_focused)),
        chunks[3],
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);
    f.render_widget(
        button("Save", section == ProfileSection::Save, Color::Green),
        buttons[0],
    );
    f.render_widget(
        button("Log out", section == ProfileSection::Logout, Color::Red),
        buttons[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_cuisines_highlighted() {
        let mut profile = ProfileModel::new();
        profile.toggle_highlighted_cuisine();
        let spans = cuisine_spans(&profile, true);
        assert_eq!(spans.len(), CUISINES.len());
        assert_eq!(spans[0].style.bg, Some(Color::Yellow));
        assert!(spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(spans[1].style.bg, None);
    }

    #[test]
    fn test_cuisines_title() {
        let mut profile = ProfileModel::new();
        assert_eq!(cuisines_title(&profile), " Favourite cuisines ");
        profile.cuisine_right();
        profile.toggle_highlighted_cuisine();
        profile.cuisine_left();
        profile.toggle_highlighted_cuisine();
        assert_eq!(
            cuisines_title(&profile),
            " Favourite cuisines: Italian · Japanese "
        );
    }
}
