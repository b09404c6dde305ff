//! Profile Screen Model
//!
//! The profile draft (photos, favourite cuisines, description) and the
//! cursor state of the editor.

use crate::catalog::{self, CUISINES};
use crate::logic::navigation;
use crate::logic::toggle::ToggleSet;

use super::types::{CuisineId, PhotoRef, TextInput};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub cuisines: ToggleSet<CuisineId>,
    pub description: String,
    pub photos: Vec<PhotoRef>,
}

impl ProfileDraft {
    /// Favourite cuisine names in catalog order
    pub fn cuisine_names(&self) -> Vec<&'static str> {
        let ids = catalog::cuisine_ids();
        self.cuisines
            .in_order(&ids)
            .filter_map(catalog::cuisine)
            .map(|c| c.name)
            .collect()
    }
}

/// Editor sections, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileSection {
    Photos,
    AddPhoto,
    Cuisines,
    Description,
    Save,
    Logout,
}

impl ProfileSection {
    const ORDER: [ProfileSection; 6] = [
        ProfileSection::Photos,
        ProfileSection::AddPhoto,
        ProfileSection::Cuisines,
        ProfileSection::Description,
        ProfileSection::Save,
        ProfileSection::Logout,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[navigation::next_index(self.position(), Self::ORDER.len())]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[navigation::prev_index(self.position(), Self::ORDER.len())]
    }

    /// Sections that swallow printable keys
    pub fn is_text(self) -> bool {
        matches!(self, ProfileSection::AddPhoto | ProfileSection::Description)
    }
}

#[derive(Clone, Debug)]
pub struct ProfileModel {
    pub draft: ProfileDraft,
    pub section: ProfileSection,
    pub photo_cursor: usize,
    pub cuisine_cursor: usize,
    /// Path or glob typed into "Add photos"
    pub photo_input: TextInput,
}

impl Default for ProfileModel {
    fn default() -> Self {
        Self {
            draft: ProfileDraft::default(),
            section: ProfileSection::Photos,
            photo_cursor: 0,
            cuisine_cursor: 0,
            photo_input: TextInput::default(),
        }
    }
}

impl ProfileModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append freshly attached photos after the existing ones
    pub fn add_photos(&mut self, photos: Vec<PhotoRef>) {
        self.draft.photos.extend(photos);
    }

    /// Remove exactly the photo at `index`; later photos shift down by one
    pub fn delete_photo(&mut self, index: usize) -> Option<PhotoRef> {
        if index >= self.draft.photos.len() {
            return None;
        }
        let removed = self.draft.photos.remove(index);
        self.photo_cursor =
            navigation::clamp_index(self.photo_cursor, self.draft.photos.len()).unwrap_or(0);
        Some(removed)
    }

    pub fn delete_highlighted_photo(&mut self) -> Option<PhotoRef> {
        self.delete_photo(self.photo_cursor)
    }

    pub fn photo_left(&mut self) {
        self.photo_cursor = navigation::prev_index(self.photo_cursor, self.draft.photos.len());
    }

    pub fn photo_right(&mut self) {
        self.photo_cursor = navigation::next_index(self.photo_cursor, self.draft.photos.len());
    }

    pub fn cuisine_left(&mut self) {
        self.cuisine_cursor = navigation::prev_index(self.cuisine_cursor, CUISINES.len());
    }

    pub fn cuisine_right(&mut self) {
        self.cuisine_cursor = navigation::next_index(self.cuisine_cursor, CUISINES.len());
    }

    /// Toggle the highlighted cuisine; returns whether it is now selected
    pub fn toggle_highlighted_cuisine(&mut self) -> Option<bool> {
        let cuisine = CUISINES.get(self.cuisine_cursor)?;
        Some(self.draft.cuisines.toggle(cuisine.id))
    }

    pub fn push_description(&mut self, c: char) {
        self.draft.description.push(c);
    }

    pub fn pop_description(&mut self) {
        self.draft.description.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo(name: &str) -> PhotoRef {
        PhotoRef {
            handle: format!("session://photos/{}", name),
            source: PathBuf::from(name),
        }
    }

    #[test]
    fn test_delete_middle_photo_shifts_rest() {
        let mut profile = ProfileModel::new();
        profile.add_photos(vec![photo("A"), photo("B"), photo("C")]);

        let removed = profile.delete_photo(1);
        assert_eq!(removed, Some(photo("B")));
        assert_eq!(profile.draft.photos, vec![photo("A"), photo("C")]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut profile = ProfileModel::new();
        profile.add_photos(vec![photo("A")]);
        assert_eq!(profile.delete_photo(5), None);
        assert_eq!(profile.draft.photos.len(), 1);
    }

    #[test]
    fn test_delete_last_photo_clamps_cursor() {
        let mut profile = ProfileModel::new();
        profile.add_photos(vec![photo("A"), photo("B")]);
        profile.photo_right();
        assert_eq!(profile.photo_cursor, 1);
        profile.delete_highlighted_photo();
        assert_eq!(profile.photo_cursor, 0);
        profile.delete_highlighted_photo();
        assert!(profile.draft.photos.is_empty());
        assert_eq!(profile.delete_highlighted_photo(), None);
    }

    #[test]
    fn test_add_photos_appends() {
        let mut profile = ProfileModel::new();
        profile.add_photos(vec![photo("A")]);
        profile.add_photos(vec![]);
        profile.add_photos(vec![photo("B"), photo("C")]);
        let names: Vec<_> = profile.draft.photos.iter().map(|p| p.source.clone()).collect();
        assert_eq!(names, vec![PathBuf::from("A"), PathBuf::from("B"), PathBuf::from("C")]);
    }

    #[test]
    fn test_cuisine_toggle_involution() {
        let mut profile = ProfileModel::new();
        profile.cuisine_right();
        assert_eq!(profile.toggle_highlighted_cuisine(), Some(true));
        assert!(profile.draft.cuisines.contains(CuisineId(2)));
        assert_eq!(profile.toggle_highlighted_cuisine(), Some(false));
        assert!(profile.draft.cuisines.is_empty());
    }

    #[test]
    fn test_cuisine_names_ignore_toggle_order() {
        let mut profile = ProfileModel::new();
        profile.draft.cuisines.toggle(CuisineId(10));
        profile.draft.cuisines.toggle(CuisineId(2));
        assert_eq!(profile.draft.cuisine_names(), ["Japanese", "Georgian"]);
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(ProfileSection::Photos.prev(), ProfileSection::Logout);
        assert_eq!(ProfileSection::Logout.next(), ProfileSection::Photos);
        assert!(ProfileSection::Description.is_text());
        assert!(!ProfileSection::Cuisines.is_text());
    }
}
