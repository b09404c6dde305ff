//! Profile screen orchestration methods
//!
//! Photo selection goes through the photo store; the draft itself is pure
//! model state.

use foodmatch::services::photos::attach_selection;

use crate::App;

impl App {
    /// Attach every file named by the "Add photos" input
    pub(crate) fn attach_photos(&mut self) {
        if self.model.profile.photo_input.is_blank() {
            self.model.profile.photo_input.clear();
            return;
        }
        let input = self.model.profile.photo_input.take();

        match attach_selection(self.photo_store.as_mut(), &input) {
            Ok(photos) if photos.is_empty() => {
                log::debug!("No files matched {:?}", input);
                self.model.show_toast(format!("No files match {}", input.trim()));
            }
            Ok(photos) => {
                let count = photos.len();
                for photo in &photos {
                    log::debug!("Attached {} from {}", photo.handle, photo.source.display());
                }
                self.model.profile.add_photos(photos);
                self.model.show_toast(format!(
                    "Added {} photo{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
            Err(e) => {
                log::warn!("Photo selection failed: {:#}", e);
                self.model.show_toast(format!("Error: {}", e));
                // Keep the typed pattern so it can be fixed
                self.model.profile.photo_input.value = input;
            }
        }
    }

    pub(crate) fn delete_highlighted_photo(&mut self) {
        if let Some(photo) = self.model.profile.delete_highlighted_photo() {
            log::debug!("Deleted {}", photo.handle);
            self.photo_store.release(&photo);
        }
    }

    /// Save has no destination; acknowledge the draft
    pub(crate) fn save_profile(&mut self) {
        let draft = &self.model.profile.draft;
        log::info!(
            "Profile saved: {} photos, {} cuisines, {} chars of description",
            draft.photos.len(),
            draft.cuisines.len(),
            draft.description.chars().count()
        );
        self.model.show_toast("Profile saved".to_string());
    }
}
