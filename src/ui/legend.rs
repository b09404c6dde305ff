use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foodmatch::Route;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
///
/// `typing` is true while a text field has focus: printable shortcuts are
/// then unavailable and only the keys that leave the field are listed.
pub fn build_hotkey_spans(route: Route, vim_mode: bool, typing: bool) -> Vec<Span<'static>> {
    let mut spans = vec![];

    match route {
        Route::Auth => {
            spans.extend(vec![
                key("↑/↓"),
                Span::raw(":Field  "),
                key("Enter"),
                Span::raw(":Submit/Select  "),
            ]);
        }
        Route::Feed => {
            let (reject, like) = if vim_mode {
                ("h/←/x", "l/→/Enter")
            } else {
                ("←/x", "→/Enter")
            };
            spans.extend(vec![
                key(reject),
                Span::raw(":Pass  "),
                key(like),
                Span::raw(":Like  "),
            ]);
        }
        Route::Search => {
            spans.extend(vec![
                key(if vim_mode { "jk/↑↓" } else { "↑/↓" }),
                Span::raw(":Move  "),
                key("Space"),
                Span::raw(":Toggle  "),
                key("Enter"),
                Span::raw(":Toggle/Apply  "),
            ]);
        }
        Route::Chat if typing => {
            spans.extend(vec![
                key("Enter"),
                Span::raw(":Send  "),
                key("Esc"),
                Span::raw(":Back to chats  "),
            ]);
        }
        Route::Chat => {
            spans.extend(vec![
                key(if vim_mode { "jk/↑↓" } else { "↑/↓" }),
                Span::raw(":Move  "),
                key("Enter"),
                Span::raw(":Open  "),
            ]);
        }
        Route::Profile => {
            spans.extend(vec![key("↑/↓"), Span::raw(":Section  ")]);
            if !typing {
                spans.extend(vec![
                    key(if vim_mode { "hl/←→" } else { "←/→" }),
                    Span::raw(":Move  "),
                    key("d"),
                    Span::raw(":Delete photo  "),
                    key("Space"),
                    Span::raw(":Toggle  "),
                ]);
            }
            spans.extend(vec![key("Enter"), Span::raw(":Confirm  ")]);
        }
    }

    if route != Route::Auth {
        spans.extend(vec![key("Tab/1-4"), Span::raw(":Screens  ")]);
    }
    if !typing {
        spans.extend(vec![key("q"), Span::raw(":Quit")]);
    } else {
        spans.extend(vec![key("^C"), Span::raw(":Quit")]);
    }

    spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, route: Route, vim_mode: bool, typing: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(route, vim_mode, typing)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .wrap(Wrap { trim: true });
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_feed_legend_mentions_vim_keys_only_in_vim_mode() {
        let plain = spans_to_text(&build_hotkey_spans(Route::Feed, false, false));
        let vim = spans_to_text(&build_hotkey_spans(Route::Feed, true, false));
        assert!(plain.contains("←/x:Pass"));
        assert!(!plain.contains("h/"));
        assert!(vim.contains("h/←/x:Pass"));
        assert!(vim.contains("l/→/Enter:Like"));
    }

    #[test]
    fn test_auth_legend_has_no_screen_switching() {
        let text = spans_to_text(&build_hotkey_spans(Route::Auth, false, false));
        assert!(!text.contains("Screens"));
    }

    #[test]
    fn test_composer_legend_offers_way_out() {
        let text = spans_to_text(&build_hotkey_spans(Route::Chat, false, true));
        assert!(text.contains("Esc:Back to chats"));
        assert!(text.contains("^C:Quit"));
        assert!(!text.contains("q:Quit"));
    }

    #[test]
    fn test_profile_text_section_hides_single_key_actions() {
        let text = spans_to_text(&build_hotkey_spans(Route::Profile, false, true));
        assert!(!text.contains("Delete photo"));
        let text = spans_to_text(&build_hotkey_spans(Route::Profile, false, false));
        assert!(text.contains("d:Delete photo"));
    }
}
