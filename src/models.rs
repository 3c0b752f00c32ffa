//! Frontend Models
//!
//! Flat to-do records plus the pure list mutations the handlers delegate to.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create a new open item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Items present when the app starts
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            text: "buy milk".to_string(),
            completed: true,
        },
        Item::new("clean kitchen"),
        Item::new("learn js"),
    ]
}

/// Append a new item unless the submitted text is empty.
/// Returns whether the list changed.
pub fn push_item(items: &mut Vec<Item>, text: String) -> bool {
    if text.is_empty() {
        return false;
    }
    items.push(Item::new(text));
    true
}

/// Flip the completion flag of the item at `index`.
/// Out-of-range indices are ignored.
pub fn toggle_completed(items: &mut [Item], index: usize) {
    if let Some(item) = items.get_mut(index) {
        item.completed = !item.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Test item");
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
    }

    #[test]
    fn test_seed_items() {
        let items = seed_items();
        assert_eq!(items.len(), 3);
        assert!(items[0].completed);
        assert!(!items[1].completed);
        assert!(!items[2].completed);
    }

    #[test]
    fn test_push_item_appends_open_item() {
        let mut items = seed_items();
        let before = items.len();
        assert!(push_item(&mut items, "buy eggs".to_string()));
        assert_eq!(items.len(), before + 1);
        let last = items.last().unwrap();
        assert_eq!(last.text, "buy eggs");
        assert!(!last.completed);
    }

    #[test]
    fn test_push_item_ignores_empty_text() {
        let mut items = seed_items();
        let snapshot = items.clone();
        assert!(!push_item(&mut items, String::new()));
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_toggle_completed_flips_single_item() {
        let mut items = seed_items();
        toggle_completed(&mut items, 1);
        assert!(items[0].completed);
        assert!(items[1].completed);
        assert!(!items[2].completed);
        toggle_completed(&mut items, 1);
        assert!(!items[1].completed);
    }

    #[test]
    fn test_toggle_completed_out_of_range_is_noop() {
        let mut items = seed_items();
        let snapshot = items.clone();
        toggle_completed(&mut items, 99);
        assert_eq!(items, snapshot);
    }
}
