//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{self, seed_items, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All to-do items, in insertion order
    pub items: Vec<Item>,
    /// Hide completed items from the list
    pub hide_completed: bool,
    /// The add form currently holds a non-empty draft
    pub form_is_valid: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: seed_items(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item from the submitted text.
/// Empty text is a silent no-op; returns whether an item was added.
pub fn store_add_item(store: &AppStore, text: String) -> bool {
    models::push_item(&mut store.items().write(), text)
}

/// Toggle completion of the item at `index` in the full list
pub fn store_toggle_item(store: &AppStore, index: usize) {
    models::toggle_completed(&mut store.items().write(), index);
}

/// Set whether completed items are hidden
pub fn store_set_hide_completed(store: &AppStore, hide: bool) {
    store.hide_completed().set(hide);
}

/// Set whether the add form currently holds text
pub fn store_set_form_validity(store: &AppStore, valid: bool) {
    store.form_is_valid().set(valid);
}
