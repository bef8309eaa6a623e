//! UI Components
//!
//! Leptos components for the todo widget.

mod new_todo_form;
mod todo_card;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use todo_card::TodoItemCard;
pub use todo_list::TodoItemsList;
