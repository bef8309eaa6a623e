//! Todo Items Context
//!
//! Single source of truth for the widget state within one page session,
//! provided via the Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItemsState;
use crate::state::{todo_items_reducer, TodoAction};
use crate::storage;

/// Store handle plus the dispatch entry point, available to every
/// component under `TodoItemsProvider`.
#[derive(Clone, Copy)]
pub struct TodoItemsContext {
    /// Widget state with field-level reactivity
    pub store: Store<TodoItemsState>,
}

impl TodoItemsContext {
    /// Run one reducer transition, then persist the new state. Every
    /// dispatch writes back, including `LoadState` (idempotent there:
    /// it writes back what was just loaded).
    pub fn dispatch(&self, action: TodoAction) {
        let next = todo_items_reducer(self.store.get_untracked(), action);
        if let Err(err) = storage::save(&next) {
            web_sys::console::warn_1(&format!("[TODO] persisting state failed: {err}").into());
        }
        *self.store.write() = next;
    }
}

/// Provides the todo items store to its children: starts empty,
/// restores the persisted snapshot when one parses, and re-loads when
/// another tab writes the storage key.
#[component]
pub fn TodoItemsProvider(children: Children) -> impl IntoView {
    let ctx = TodoItemsContext {
        store: Store::new(TodoItemsState::default()),
    };

    if let Some(snapshot) = storage::load() {
        web_sys::console::log_1(
            &format!("[TODO] restored {} items", snapshot.todo_items.len()).into(),
        );
        ctx.dispatch(TodoAction::LoadState(snapshot));
    }
    storage::subscribe_external_changes(move || {
        if let Some(snapshot) = storage::load() {
            web_sys::console::log_1(&"[TODO] reloading after external change".into());
            ctx.dispatch(TodoAction::LoadState(snapshot));
        }
    });

    provide_context(ctx);
    children()
}

/// Grab the context from a component below the provider
pub fn use_todo_items() -> TodoItemsContext {
    use_context::<TodoItemsContext>()
        .expect("use_todo_items should only be used inside TodoItemsProvider")
}
