//! Search Screen Model
//!
//! Filter checkboxes and the (unfiltered) result set.

use crate::catalog::{self, CUISINES, REGIONS};
use crate::logic::navigation;
use crate::logic::toggle::ToggleSet;

use super::types::{Candidate, CuisineId, RegionId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub cuisines: ToggleSet<CuisineId>,
    pub regions: ToggleSet<RegionId>,
    pub common_dishes_only: bool,
}

impl FilterSelection {
    /// Number of active filters (for the Apply toast)
    pub fn active_count(&self) -> usize {
        self.cuisines.len() + self.regions.len() + usize::from(self.common_dishes_only)
    }

    /// Selected cuisine then region names, each in catalog order
    pub fn selected_names(&self) -> Vec<&'static str> {
        let cuisine_ids = catalog::cuisine_ids();
        let region_ids = catalog::region_ids();
        self.cuisines
            .in_order(&cuisine_ids)
            .filter_map(catalog::cuisine)
            .map(|c| c.name)
            .chain(
                self.regions
                    .in_order(&region_ids)
                    .filter_map(catalog::region)
                    .map(|r| r.name),
            )
            .collect()
    }
}

/// One row of the filter panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterItem {
    Cuisine(CuisineId),
    Region(RegionId),
    CommonDishes,
    Apply,
}

/// Filter panel rows in display order
pub fn filter_items() -> Vec<FilterItem> {
    CUISINES
        .iter()
        .map(|c| FilterItem::Cuisine(c.id))
        .chain(REGIONS.iter().map(|r| FilterItem::Region(r.id)))
        .chain([FilterItem::CommonDishes, FilterItem::Apply])
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterAction {
    Toggled { item: FilterItem, selected: bool },
    Applied,
}

#[derive(Clone, Debug)]
pub struct SearchModel {
    pub filters: FilterSelection,
    pub items: Vec<FilterItem>,
    pub cursor: usize,
    pub results: Vec<Candidate>,
}

impl Default for SearchModel {
    fn default() -> Self {
        Self {
            filters: FilterSelection::default(),
            items: filter_items(),
            cursor: 0,
            results: catalog::candidates(),
        }
    }
}

impl SearchModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_down(&mut self) {
        self.cursor = navigation::next_index(self.cursor, self.items.len());
    }

    pub fn cursor_up(&mut self) {
        self.cursor = navigation::prev_index(self.cursor, self.items.len());
    }

    pub fn highlighted(&self) -> Option<FilterItem> {
        self.items.get(self.cursor).copied()
    }

    pub fn is_checked(&self, item: FilterItem) -> bool {
        match item {
            FilterItem::Cuisine(id) => self.filters.cuisines.contains(id),
            FilterItem::Region(id) => self.filters.regions.contains(id),
            FilterItem::CommonDishes => self.filters.common_dishes_only,
            FilterItem::Apply => false,
        }
    }

    /// Toggle the highlighted checkbox or press Apply
    pub fn activate(&mut self) -> Option<FilterAction> {
        let item = self.highlighted()?;
        let selected = match item {
            FilterItem::Cuisine(id) => self.filters.cuisines.toggle(id),
            FilterItem::Region(id) => self.filters.regions.toggle(id),
            FilterItem::CommonDishes => {
                self.filters.common_dishes_only = !self.filters.common_dishes_only;
                self.filters.common_dishes_only
            }
            FilterItem::Apply => return Some(FilterAction::Applied),
        };
        Some(FilterAction::Toggled { item, selected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_items_follow_catalog_order() {
        let items = filter_items();
        assert_eq!(items.len(), CUISINES.len() + REGIONS.len() + 2);
        assert_eq!(items[0], FilterItem::Cuisine(CUISINES[0].id));
        assert_eq!(items[CUISINES.len()], FilterItem::Region(REGIONS[0].id));
        assert_eq!(items.last(), Some(&FilterItem::Apply));
    }

    #[test]
    fn test_activate_toggles_highlighted_cuisine() {
        let mut model = SearchModel::new();
        let action = model.activate();
        assert_eq!(
            action,
            Some(FilterAction::Toggled {
                item: FilterItem::Cuisine(CuisineId(1)),
                selected: true
            })
        );
        assert!(model.filters.cuisines.contains(CuisineId(1)));

        model.activate();
        assert!(model.filters.cuisines.is_empty());
    }

    #[test]
    fn test_activate_twice_restores_region() {
        let mut model = SearchModel::new();
        model.cursor = model
            .items
            .iter()
            .position(|i| *i == FilterItem::Region(REGIONS[2].id))
            .unwrap();
        let before = model.filters.clone();

        assert_eq!(
            model.activate(),
            Some(FilterAction::Toggled {
                item: FilterItem::Region(RegionId(3)),
                selected: true
            })
        );
        assert!(model.filters.regions.contains(RegionId(3)));
        assert!(model.filters.cuisines.is_empty());

        assert_eq!(
            model.activate(),
            Some(FilterAction::Toggled {
                item: FilterItem::Region(RegionId(3)),
                selected: false
            })
        );
        assert_eq!(model.filters, before);
    }

    #[test]
    fn test_selected_names_follow_catalog_order() {
        let mut model = SearchModel::new();
        assert!(model.filters.selected_names().is_empty());

        model.filters.regions.toggle(RegionId(2));
        model.filters.cuisines.toggle(CuisineId(5));
        model.filters.cuisines.toggle(CuisineId(1));
        model.filters.common_dishes_only = true;
        assert_eq!(model.filters.selected_names(), ["Italian", "Thai", "Asia"]);
    }

    #[test]
    fn test_common_dishes_flag() {
        let mut model = SearchModel::new();
        model.cursor = model
            .items
            .iter()
            .position(|i| *i == FilterItem::CommonDishes)
            .unwrap();
        model.activate();
        assert!(model.filters.common_dishes_only);
        assert_eq!(model.filters.active_count(), 1);
    }

    #[test]
    fn test_apply_does_not_filter_results() {
        let mut model = SearchModel::new();
        model.activate();
        model.cursor = model.items.len() - 1;
        assert_eq!(model.activate(), Some(FilterAction::Applied));
        assert_eq!(model.results.len(), catalog::candidates().len());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut model = SearchModel::new();
        model.cursor_up();
        assert_eq!(model.highlighted(), Some(FilterItem::Apply));
        model.cursor_down();
        assert_eq!(model.cursor, 0);
    }
}
