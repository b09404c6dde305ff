//! UI Model
//!
//! Preferences and transient visual state shared by every screen.

use std::time::Instant;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// How long a toast stays up
    pub toast_ms: u64,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, toast_ms: u64) -> Self {
        Self {
            vim_mode,
            toast_message: None,
            toast_ms,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has outlived its lifetime
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis(), self.toast_ms)
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
