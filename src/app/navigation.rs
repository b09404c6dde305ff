//! Navigation orchestration methods
//!
//! Every route change made from the UI goes through here so photos attached
//! on the profile screen are released when that screen's draft is dropped.

use foodmatch::model::Model;
use foodmatch::Route;

use crate::App;

impl App {
    /// Run a model operation that may change the route
    pub(crate) fn change_route(&mut self, op: impl FnOnce(&mut Model) -> Route) -> Route {
        let from = self.model.route;
        let draft_photos = if from == Route::Profile {
            self.model.profile.draft.photos.clone()
        } else {
            Vec::new()
        };

        let to = op(&mut self.model);

        if from == Route::Profile && to != Route::Profile {
            for photo in &draft_photos {
                self.photo_store.release(photo);
            }
        }
        to
    }

    pub(crate) fn go_to(&mut self, route: Route) -> Route {
        self.change_route(|model| model.navigate(route))
    }

    pub(crate) fn next_tab(&mut self) {
        let route = self.model.route.next_tab();
        self.go_to(route);
    }

    pub(crate) fn prev_tab(&mut self) {
        let route = self.model.route.prev_tab();
        self.go_to(route);
    }

    /// Jump to the n-th navigation bar entry (0-based)
    pub(crate) fn select_tab(&mut self, index: usize) {
        if let Some(route) = Route::TABS.get(index).copied() {
            self.go_to(route);
        }
    }
}
