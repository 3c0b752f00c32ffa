//! Hide Completed Toggle Component
//!
//! Checkbox controlling whether completed items are shown.

use leptos::prelude::*;

use crate::store::{store_set_hide_completed, use_app_store, AppStateStoreFields};

/// Filter checkbox, rendered outside the main container
#[component]
pub fn HideCompletedToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <label class="hide-completed">
            <input
                type="checkbox"
                prop:checked=move || store.hide_completed().get()
                on:change=move |ev| store_set_hide_completed(&store, event_target_checked(&ev))
            />
            " Hide completed items"
        </label>
    }
}
