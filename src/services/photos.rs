//! Photo storage seam
//!
//! Attaching a photo turns a local file into a reference the UI can show.
//! [`SessionPhotoStore`] only mints in-session handles; nothing outlives the
//! process.

use anyhow::Result;
use std::path::Path;

use crate::logic::photos::{expand_selection, file_label};
use crate::model::types::PhotoRef;

pub trait PhotoStore {
    /// Make `source` displayable for the rest of the session
    fn attach(&mut self, source: &Path) -> Result<PhotoRef>;

    /// Drop a reference that is no longer shown
    fn release(&mut self, photo: &PhotoRef);
}

/// Mints `session://photos/<n>/<file name>` handles
#[derive(Debug, Default)]
pub struct SessionPhotoStore {
    next_id: u64,
}

impl SessionPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhotoStore for SessionPhotoStore {
    fn attach(&mut self, source: &Path) -> Result<PhotoRef> {
        self.next_id += 1;
        Ok(PhotoRef {
            handle: format!("session://photos/{}/{}", self.next_id, file_label(source)),
            source: source.to_path_buf(),
        })
    }

    fn release(&mut self, photo: &PhotoRef) {
        log::debug!("Released {}", photo.handle);
    }
}

/// Expand the typed selection and attach every file it names
pub fn attach_selection(store: &mut dyn PhotoStore, input: &str) -> Result<Vec<PhotoRef>> {
    expand_selection(input)?
        .iter()
        .map(|path| store.attach(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_handles_are_unique() {
        let mut store = SessionPhotoStore::new();
        let a = store.attach(&PathBuf::from("/tmp/dish.jpg")).unwrap();
        let b = store.attach(&PathBuf::from("/tmp/dish.jpg")).unwrap();
        assert_ne!(a.handle, b.handle);
        assert_eq!(a.handle, "session://photos/1/dish.jpg");
        assert_eq!(a.source, PathBuf::from("/tmp/dish.jpg"));
    }

    #[test]
    fn test_attach_selection_expands_glob() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.jpg"), b"1").unwrap();
        fs::write(dir.path().join("two.jpg"), b"2").unwrap();

        let mut store = SessionPhotoStore::new();
        let photos =
            attach_selection(&mut store, &format!("{}/*.jpg", dir.path().display())).unwrap();
        assert_eq!(photos.len(), 2);
        assert!(photos[0].handle.ends_with("one.jpg"));
        assert!(photos[1].handle.ends_with("two.jpg"));
    }

    #[test]
    fn test_attach_selection_with_no_matches() {
        let mut store = SessionPhotoStore::new();
        let photos = attach_selection(&mut store, "/definitely/not/here/*.jpg").unwrap();
        assert!(photos.is_empty());
    }
}
