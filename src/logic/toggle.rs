//! Tag membership sets
//!
//! Backs the search filters and the profile's favourite cuisines. Membership
//! is a set; display always follows the catalog order passed in by the caller.

use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleSet<T: Ord + Copy> {
    members: BTreeSet<T>,
}

impl<T: Ord + Copy> Default for ToggleSet<T> {
    fn default() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Copy> ToggleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `tag`
    ///
    /// # Returns
    /// `true` if the tag is now selected
    ///
    /// # Examples
    /// ```
    /// use foodmatch::logic::toggle::ToggleSet;
    ///
    /// let mut set = ToggleSet::new();
    /// assert!(set.toggle(3));
    /// assert!(set.contains(3));
    /// assert!(!set.toggle(3));
    /// assert!(set.is_empty());
    /// ```
    pub fn toggle(&mut self, tag: T) -> bool {
        if self.members.remove(&tag) {
            false
        } else {
            self.members.insert(tag);
            true
        }
    }

    pub fn contains(&self, tag: T) -> bool {
        self.members.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Selected tags in the order they appear in `catalog_order`
    pub fn in_order<'a>(&'a self, catalog_order: &'a [T]) -> impl Iterator<Item = T> + 'a {
        catalog_order
            .iter()
            .copied()
            .filter(move |tag| self.members.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut set = ToggleSet::new();
        assert!(set.toggle("Italian"));
        assert!(set.contains("Italian"));
        assert!(!set.toggle("Italian"));
        assert!(!set.contains("Italian"));
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut set = ToggleSet::new();
        set.toggle(1u8);
        set.toggle(4u8);
        let original = set.clone();

        for tag in [1u8, 2, 4, 7] {
            set.toggle(tag);
            set.toggle(tag);
            assert_eq!(set, original, "toggling {} twice changed the set", tag);
        }
    }

    #[test]
    fn test_in_order_follows_catalog_not_selection() {
        let catalog = [10u8, 20, 30, 40];
        let mut set = ToggleSet::new();
        set.toggle(40);
        set.toggle(10);
        set.toggle(30);

        let ordered: Vec<u8> = set.in_order(&catalog).collect();
        assert_eq!(ordered, vec![10, 30, 40]);
    }

    #[test]
    fn test_in_order_skips_tags_missing_from_catalog() {
        let mut set = ToggleSet::new();
        set.toggle(99u8);
        assert_eq!(set.in_order(&[1, 2, 3]).count(), 0);
        assert_eq!(set.len(), 1);
    }
}
