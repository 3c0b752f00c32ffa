//! Visibility Helpers
//!
//! Pure projection from the item list to the rows the view shows.

use crate::models::Item;

/// Shown in place of the list when no row is visible
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to show";

/// Items to display given the hide-completed flag.
/// Returns (original index, item) pairs in list order so row handlers can
/// locate their item in the full list after filtering.
pub fn visible_items(items: &[Item], hide_completed: bool) -> Vec<(usize, Item)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !hide_completed || !item.completed)
        .map(|(index, item)| (index, item.clone()))
        .collect()
}
