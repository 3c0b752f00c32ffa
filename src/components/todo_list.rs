//! Todo List Component
//!
//! Renders the visible rows and the empty-list message.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::filter::EMPTY_LIST_MESSAGE;
use crate::models::Item;

/// List of visible items
#[component]
pub fn TodoList(visible: Memo<Vec<(usize, Item)>>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || visible.get()
                key=|(index, item)| (*index, item.text.clone(), item.completed)
                children=move |(index, item)| {
                    view! {
                        <TodoRow index=index text=item.text.clone() completed=item.completed />
                    }
                }
            />
        </ul>

        {move || {
            visible
                .get()
                .is_empty()
                .then(|| view! { <pre class="empty-message">{EMPTY_LIST_MESSAGE}</pre> })
        }}
    }
}
