//! Keyboard Input Handler
//!
//! Global keys first (quit, tab switching), then the active screen's keys.
//! Printable keys go to the focused text field when there is one, so `q` and
//! the digit shortcuts only act while nothing is being typed.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use foodmatch::logic::sequencer::SwipeDirection;
use foodmatch::model::chat::ChatFocus;
use foodmatch::model::profile::ProfileSection;
use foodmatch::Route;

use crate::App;

/// Printable character without Ctrl/Alt
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    let typing = app.model.is_typing();

    if !typing && key.code == KeyCode::Char('q') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Navigation bar (not shown on the auth screen)
    if app.model.route != Route::Auth {
        match key.code {
            KeyCode::Tab => {
                app.next_tab();
                return Ok(());
            }
            KeyCode::BackTab => {
                app.prev_tab();
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='4') if !typing => {
                app.select_tab(c as usize - '1' as usize);
                return Ok(());
            }
            _ => {}
        }
    }

    match app.model.route {
        Route::Auth => handle_auth_key(app, key),
        Route::Feed => handle_feed_key(app, key),
        Route::Search => handle_search_key(app, key),
        Route::Chat => handle_chat_key(app, key),
        Route::Profile => handle_profile_key(app, key),
    }

    Ok(())
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    let auth = &mut app.model.auth;
    match key.code {
        KeyCode::Up | KeyCode::BackTab => auth.focus = auth.focus.prev(),
        KeyCode::Down | KeyCode::Tab => auth.focus = auth.focus.next(),
        KeyCode::Enter => app.activate_auth_focus(),
        KeyCode::Backspace => {
            if let Some(input) = auth.focused_input() {
                input.backspace();
            }
        }
        _ => {
            if let (Some(c), Some(input)) = (typed_char(&key), auth.focused_input()) {
                input.push(c);
            }
        }
    }
}

fn handle_feed_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Left | KeyCode::Char('x') => app.swipe(SwipeDirection::Reject),
        KeyCode::Right | KeyCode::Enter => app.swipe(SwipeDirection::Like),
        KeyCode::Char('h') if vim_mode => app.swipe(SwipeDirection::Reject),
        KeyCode::Char('l') if vim_mode => app.swipe(SwipeDirection::Like),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Up => app.model.search.cursor_up(),
        KeyCode::Down => app.model.search.cursor_down(),
        KeyCode::Char('k') if vim_mode => app.model.search.cursor_up(),
        KeyCode::Char('j') if vim_mode => app.model.search.cursor_down(),
        KeyCode::Enter => app.activate_filter(),
        // Space only ticks boxes; Apply is a button
        KeyCode::Char(' ') if !app.on_apply_button() => app.activate_filter(),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let chat = &mut app.model.chat;
    match chat.focus {
        ChatFocus::List => match key.code {
            KeyCode::Up => chat.cursor_up(),
            KeyCode::Down => chat.cursor_down(),
            KeyCode::Char('k') if vim_mode => chat.cursor_up(),
            KeyCode::Char('j') if vim_mode => chat.cursor_down(),
            KeyCode::Enter => {
                if let Some(id) = chat.open_highlighted() {
                    log::debug!("Opened thread {:?}", id);
                }
            }
            _ => {}
        },
        ChatFocus::Composer => match key.code {
            KeyCode::Esc => chat.focus_list(),
            KeyCode::Enter => app.send_chat_message(),
            KeyCode::Backspace => chat.input.backspace(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    chat.input.push(c);
                }
            }
        },
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let section = app.model.profile.section;

    match key.code {
        KeyCode::Up => {
            app.model.profile.section = section.prev();
            return;
        }
        KeyCode::Down => {
            app.model.profile.section = section.next();
            return;
        }
        KeyCode::Char('k') if vim_mode && !section.is_text() => {
            app.model.profile.section = section.prev();
            return;
        }
        KeyCode::Char('j') if vim_mode && !section.is_text() => {
            app.model.profile.section = section.next();
            return;
        }
        _ => {}
    }

    let left = key.code == KeyCode::Left || (vim_mode && key.code == KeyCode::Char('h'));
    let right = key.code == KeyCode::Right || (vim_mode && key.code == KeyCode::Char('l'));
    let profile = &mut app.model.profile;

    match section {
        ProfileSection::Photos => {
            if left {
                profile.photo_left();
            } else if right {
                profile.photo_right();
            } else if matches!(key.code, KeyCode::Char('d') | KeyCode::Delete) {
                app.delete_highlighted_photo();
            }
        }
        ProfileSection::AddPhoto => match key.code {
            KeyCode::Enter => app.attach_photos(),
            KeyCode::Backspace => profile.photo_input.backspace(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    profile.photo_input.push(c);
                }
            }
        },
        ProfileSection::Cuisines => {
            if left {
                profile.cuisine_left();
            } else if right {
                profile.cuisine_right();
            } else if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                profile.toggle_highlighted_cuisine();
            }
        }
        ProfileSection::Description => match key.code {
            KeyCode::Enter => profile.push_description('\n'),
            KeyCode::Backspace => profile.pop_description(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    profile.push_description(c);
                }
            }
        },
        ProfileSection::Save => {
            if key.code == KeyCode::Enter {
                app.save_profile();
            }
        }
        ProfileSection::Logout => {
            if key.code == KeyCode::Enter {
                app.logout();
            }
        }
    }
}
