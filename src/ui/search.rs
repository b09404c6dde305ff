use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use foodmatch::catalog;
use foodmatch::logic::formatting::join_tags;
use foodmatch::model::search::FilterItem;
use foodmatch::model::SearchModel;

/// Checkbox row text for a filter item
pub fn item_label(item: FilterItem, checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    match item {
        FilterItem::Cuisine(id) => format!(
            "{} {}",
            mark,
            catalog::cuisine(id).map(|c| c.name).unwrap_or("?")
        ),
        FilterItem::Region(id) => format!(
            "{} {}",
            mark,
            catalog::region(id).map(|r| r.name).unwrap_or("?")
        ),
        FilterItem::CommonDishes => format!("{} Only common dishes", mark),
        FilterItem::Apply => "[ Apply filters ]".to_string(),
    }
}

pub fn render_search(f: &mut Frame, area: Rect, search: &SearchModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = search
        .items
        .iter()
        .map(|item| {
            let label = item_label(*item, search.is_checked(*item));
            let style = match item {
                FilterItem::Apply => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let title = format!(" Filters ({}) ", search.filters.active_count());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(search.cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let results: Vec<ListItem> = search
        .results
        .iter()
        .map(|c| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    c.heading(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    c.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    f.render_widget(
        List::new(results).block(
            Block::default()
                .borders(Borders::ALL)
                .title(results_title(&search.filters.selected_names())),
        ),
        chunks[1],
    );
}

/// Results pane title, listing the ticked tags
pub fn results_title(selected: &[&str]) -> String {
    if selected.is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results for {} ", join_tags(selected.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodmatch::catalog::{CUISINES, REGIONS};

    #[test]
    fn test_item_labels() {
        assert_eq!(
            item_label(FilterItem::Cuisine(CUISINES[0].id), true),
            "[x] Italian"
        );
        assert_eq!(
            item_label(FilterItem::Region(REGIONS[0].id), false),
            "[ ] Europe"
        );
        assert_eq!(
            item_label(FilterItem::CommonDishes, false),
            "[ ] Only common dishes"
        );
    }

    #[test]
    fn test_results_title_lists_selection() {
        assert_eq!(results_title(&[]), " Results ");
        assert_eq!(
            results_title(&["Italian", "Asia"]),
            " Results for Italian · Asia "
        );
    }
}
