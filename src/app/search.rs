//! Search screen orchestration methods

use foodmatch::model::search::{FilterAction, FilterItem};

use crate::App;

impl App {
    /// Toggle the highlighted filter or apply the selection
    pub(crate) fn activate_filter(&mut self) {
        match self.model.search.activate() {
            Some(FilterAction::Toggled { item, selected }) => {
                log::debug!("Filter {:?} -> {}", item, selected);
            }
            Some(FilterAction::Applied) => {
                let filters = &self.model.search.filters;
                let count = filters.active_count();
                log::info!(
                    "Filters applied: {} cuisines, {} regions, common dishes only: {}",
                    filters.cuisines.len(),
                    filters.regions.len(),
                    filters.common_dishes_only
                );
                self.model
                    .show_toast(format!("Filters applied ({} selected)", count));
            }
            None => {}
        }
    }

    /// Whether the cursor rests on the Apply button
    pub(crate) fn on_apply_button(&self) -> bool {
        self.model.search.highlighted() == Some(FilterItem::Apply)
    }
}
