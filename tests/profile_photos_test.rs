//! Integration tests for the profile editor
//!
//! Photo selection runs against real files in a temp dir; the draft is the
//! profile model's.

use std::fs;

use foodmatch::catalog::CUISINES;
use foodmatch::model::ProfileModel;
use foodmatch::services::photos::attach_selection;
use foodmatch::services::{PhotoStore, SessionPhotoStore};

/// Test: Attaching appends after existing photos and deleting index 1 keeps A and C
#[test]
fn test_attach_then_delete_middle_photo() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        fs::write(dir.path().join(name), b"img").unwrap();
    }

    let mut store = SessionPhotoStore::new();
    let mut profile = ProfileModel::new();
    let first = attach_selection(&mut store, &dir.path().join("a.jpg").display().to_string())
        .unwrap();
    profile.add_photos(first);
    let rest = attach_selection(
        &mut store,
        &format!(
            "{} {}",
            dir.path().join("b.jpg").display(),
            dir.path().join("c.jpg").display()
        ),
    )
    .unwrap();
    profile.add_photos(rest);

    let names: Vec<_> = profile
        .draft
        .photos
        .iter()
        .map(|p| p.source.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.jpg", "b.jpg", "c.jpg"]);

    let removed = profile.delete_photo(1).unwrap();
    store.release(&removed);
    assert!(removed.handle.ends_with("b.jpg"));

    let names: Vec<_> = profile
        .draft
        .photos
        .iter()
        .map(|p| p.source.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.jpg", "c.jpg"]);
}

/// Test: Deleting past the end changes nothing
#[test]
fn test_delete_out_of_range() {
    let mut profile = ProfileModel::new();
    assert!(profile.delete_photo(0).is_none());
    assert!(profile.draft.photos.is_empty());
}

/// Test: A malformed glob is reported as an error
#[test]
fn test_bad_pattern_is_an_error() {
    let mut store = SessionPhotoStore::new();
    let err = attach_selection(&mut store, "photos/[").unwrap_err();
    assert!(err.to_string().contains("Invalid photo pattern"));
}

/// Test: Toggling the same cuisine twice restores the draft
#[test]
fn test_cuisine_toggle_is_involution() {
    let mut profile = ProfileModel::new();
    profile.cuisine_right();
    let before = profile.draft.clone();

    assert_eq!(profile.toggle_highlighted_cuisine(), Some(true));
    assert!(profile.draft.cuisines.contains(CUISINES[1].id));
    assert_eq!(profile.toggle_highlighted_cuisine(), Some(false));
    assert_eq!(profile.draft, before);
}
