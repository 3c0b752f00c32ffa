//! Quicklist Frontend App
//!
//! Root component wiring the store, the add form, the list, and the filter.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HideCompletedToggle, NewTodoForm, TodoList};
use crate::filter::visible_items;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::new());

    // Provide store to all children
    provide_context(store);

    // Rows currently shown, as (index into the full list, item) pairs
    let visible = Memo::new(move |_| {
        visible_items(&store.items().read(), store.hide_completed().get())
    });

    // Log list changes
    Effect::new(move |_| {
        let total = store.items().read().len();
        let shown = visible.get().len();
        web_sys::console::log_1(&format!("[APP] {} items, {} visible", total, shown).into());
    });

    view! {
        <div id="todos" class="app-layout">
            <h1>"Quicklist"</h1>

            <NewTodoForm />

            <TodoList visible=visible />

            <p class="item-count">
                {move || {
                    format!("{} items, {} visible", store.items().read().len(), visible.get().len())
                }}
            </p>
        </div>

        <HideCompletedToggle />
    }
}
