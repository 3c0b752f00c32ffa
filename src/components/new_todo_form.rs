//! New Todo Form Component
//!
//! Add form with the empty-submit guard and the key-up validity indicator.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_add_item, store_set_form_validity, use_app_store, AppStateStoreFields,
};

/// Form for adding new items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.is_empty() {
            return;
        }
        store_add_item(&store, text);
        // Mutation first, then reset the field
        set_draft.set(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    // Validity follows the raw field value on every keystroke
    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        store_set_form_validity(&store, !value.is_empty());
        set_draft.set(value);
    };

    let form_class = move || {
        if store.form_is_valid().get() {
            "new-todo-form valid"
        } else {
            "new-todo-form"
        }
    };

    view! {
        <form class=form_class on:submit=on_submit>
            <input
                type="text"
                placeholder="Add new item..."
                node_ref=input_ref
                prop:value=move || draft.get()
                on:keyup=on_keyup
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
