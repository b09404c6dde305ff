//! Formatting and display logic
//!
//! Pure functions for turning model values into terminal text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns
///
/// Adds an ellipsis when something was cut off.
///
/// # Examples
/// ```
/// use foodmatch::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("carbonara", 20), "carbonara");
/// assert_eq!(truncate_to_width("carbonara", 5), "carb…");
/// assert_eq!(truncate_to_width("carbonara", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Password field contents
pub fn mask_secret(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

/// Unread badge for the thread list (empty when nothing is unread)
pub fn unread_badge(unread: u32) -> String {
    match unread {
        0 => String::new(),
        1..=99 => format!("({})", unread),
        _ => "(99+)".to_string(),
    }
}

/// Tag names joined onto one line
pub fn join_tags<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("ramen", 5), "ramen");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("寿司寿司", 5), "寿司…");
    }

    #[test]
    fn test_mask_secret_counts_chars() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("pässword"), "••••••••");
    }

    #[test]
    fn test_unread_badge() {
        assert_eq!(unread_badge(0), "");
        assert_eq!(unread_badge(2), "(2)");
        assert_eq!(unread_badge(150), "(99+)");
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(join_tags(["Thai", "Indian"]), "Thai · Indian");
        assert_eq!(join_tags(Vec::<&str>::new()), "");
    }
}
