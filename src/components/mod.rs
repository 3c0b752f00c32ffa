//! UI Components
//!
//! Reusable Leptos components.

mod hide_completed_toggle;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use hide_completed_toggle::HideCompletedToggle;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
