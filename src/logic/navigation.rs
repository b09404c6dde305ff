//! Cursor movement logic
//!
//! Pure functions for moving list cursors (thread list, filter checkboxes,
//! photo strip) with wrapping, and for keeping a cursor in range after the
//! list shrinks.

/// Advance a cursor, wrapping to the start
///
/// # Examples
/// ```
/// use foodmatch::logic::navigation::next_index;
///
/// assert_eq!(next_index(0, 3), 1);
/// assert_eq!(next_index(2, 3), 0);
/// assert_eq!(next_index(0, 0), 0);
/// ```
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Move a cursor back, wrapping to the end
///
/// # Examples
/// ```
/// use foodmatch::logic::navigation::prev_index;
///
/// assert_eq!(prev_index(1, 3), 0);
/// assert_eq!(prev_index(0, 3), 2);
/// assert_eq!(prev_index(0, 0), 0);
/// ```
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Keep a cursor on a valid item after the list changed size
///
/// Returns `None` for an empty list.
pub fn clamp_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.min(len - 1))
    }
}
