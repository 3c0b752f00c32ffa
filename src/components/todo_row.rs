//! Todo Row Component
//!
//! A single rendered item.

use leptos::prelude::*;

use crate::store::{store_toggle_item, use_app_store};

/// One list row; clicking it flips the item's completion flag
#[component]
pub fn TodoRow(index: usize, text: String, completed: bool) -> impl IntoView {
    let store = use_app_store();

    let row_class = if completed { "todo-row done" } else { "todo-row" };

    view! {
        <li class=row_class on:click=move |_| store_toggle_item(&store, index)>
            {text}
        </li>
    }
}
