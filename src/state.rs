//! Todo State Reducer
//!
//! Pure transition function over `TodoItemsState`. All mutation flows
//! through `todo_items_reducer`; the view layer never touches the item
//! list directly.

use crate::models::{generate_id, NewTodoItem, TodoEditValue, TodoItem, TodoItemsState};

/// Every state transition the widget can perform
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    /// Replace the whole state with a snapshot restored from storage.
    /// Taken verbatim; the storage adapter is the schema boundary.
    LoadState(TodoItemsState),
    /// Prepend a new item with a fresh id; `done` defaults to false
    Add(NewTodoItem),
    /// Remove the item with this id; silently does nothing when absent
    Delete { id: String },
    /// Replace title and details of the item with this id
    Edit { id: String, value: TodoEditValue },
    /// Flip the done flag of the item with this id
    ToggleDone { id: String },
}

/// Compute the next state. Consumes the current state, so unchanged
/// items move over without copies.
///
/// Pre-dispatch validation (non-empty title) is the caller's job; the
/// reducer trusts its input and only enforces id lookups.
///
/// # Panics
/// `Edit` and `ToggleDone` panic when no item matches the id. That is a
/// caller bug, not a recoverable condition.
pub fn todo_items_reducer(state: TodoItemsState, action: TodoAction) -> TodoItemsState {
    match action {
        TodoAction::LoadState(snapshot) => snapshot,
        TodoAction::Add(new_item) => {
            let mut todo_items = Vec::with_capacity(state.todo_items.len() + 1);
            todo_items.push(TodoItem {
                id: generate_id(),
                title: new_item.title,
                details: new_item.details,
                done: new_item.done.unwrap_or(false),
            });
            todo_items.extend(state.todo_items);
            TodoItemsState { todo_items }
        }
        TodoAction::Delete { id } => {
            let mut todo_items = state.todo_items;
            todo_items.retain(|item| item.id != id);
            TodoItemsState { todo_items }
        }
        TodoAction::Edit { id, value } => {
            let mut todo_items = state.todo_items;
            let item = todo_items
                .iter_mut()
                .find(|item| item.id == id)
                .unwrap_or_else(|| panic!("edit dispatched for unknown todo id {id}"));
            item.title = value.title;
            item.details = value.details;
            TodoItemsState { todo_items }
        }
        TodoAction::ToggleDone { id } => {
            let mut todo_items = state.todo_items;
            let item = todo_items
                .iter_mut()
                .find(|item| item.id == id)
                .unwrap_or_else(|| panic!("toggleDone dispatched for unknown todo id {id}"));
            item.done = !item.done;
            TodoItemsState { todo_items }
        }
    }
}
