//! Photo selection
//!
//! The terminal has no file picker, so the owner types one or more paths or
//! glob patterns separated by whitespace. Each pattern expands to the files it
//! matches; a pattern that matches nothing contributes nothing.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Expand typed paths/patterns into the selected files
///
/// Matches of each pattern come back sorted (glob's order); patterns keep the
/// order they were typed in. Directories are skipped.
pub fn expand_selection(input: &str) -> Result<Vec<PathBuf>> {
    let mut selected = Vec::new();

    for pattern in input.split_whitespace() {
        let paths = glob::glob(pattern)
            .with_context(|| format!("Invalid photo pattern: {}", pattern))?;

        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => selected.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable photo path: {}", e),
            }
        }
    }

    Ok(selected)
}

/// Display name for an attached file
pub fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("pasta.jpg");
        fs::write(&photo, b"jpg").unwrap();

        let selected = expand_selection(photo.to_str().unwrap()).unwrap();
        assert_eq!(selected, vec![photo]);
    }

    #[test]
    fn test_expand_glob_is_sorted_and_skips_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::create_dir(dir.path().join("c.png")).unwrap();

        let pattern = format!("{}/*.png", dir.path().display());
        let selected = expand_selection(&pattern).unwrap();
        let names: Vec<String> = selected.iter().map(|p| file_label(p)).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_missing_file_selects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jpg");
        assert!(expand_selection(missing.to_str().unwrap()).unwrap().is_empty());
        assert!(expand_selection("   ").unwrap().is_empty());
    }

    #[test]
    fn test_multiple_patterns_keep_typed_order() {
        let dir = tempfile::tempdir().unwrap();
        let z = dir.path().join("z.jpg");
        let a = dir.path().join("a.jpg");
        fs::write(&z, b"z").unwrap();
        fs::write(&a, b"a").unwrap();

        let input = format!("{} {}", z.display(), a.display());
        assert_eq!(expand_selection(&input).unwrap(), vec![z, a]);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = expand_selection("[unclosed").unwrap_err();
        assert!(err.to_string().contains("Invalid photo pattern"));
    }
}
