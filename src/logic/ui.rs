//! UI state transition logic
//!
//! Pure functions for toast lifetime and swipe animation placement.

use crate::logic::sequencer::SwipeDirection;

/// Whether a toast shown `elapsed_ms` ago should be taken down
///
/// # Examples
/// ```
/// use foodmatch::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200, 1500));
/// assert!(should_dismiss_toast(1500, 1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, lifetime_ms: u64) -> bool {
    elapsed_ms >= lifetime_ms as u128
}

/// Toasts starting with "Error:" are drawn in the error style
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Horizontal shift of the card while it flies off screen
///
/// A like slides the card right, a reject slides it left, both by a quarter
/// of the available width. No card in flight means no shift.
pub fn swipe_offset(direction: Option<SwipeDirection>, width: u16) -> i32 {
    let shift = i32::from(width / 4);
    match direction {
        Some(d) => i32::from(d.offset()) * shift,
        None => 0,
    }
}
