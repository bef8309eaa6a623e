//! Todo List Component
//!
//! Renders all items incomplete-first and animates reordering.

use leptos::html::Ul;
use leptos::prelude::*;
use leptos_flip::{animate_moves, SpringConfig};

use crate::components::TodoItemCard;
use crate::context::use_todo_items;
use crate::models::{TodoItem, TodoItemsStateStoreFields};
use crate::order::display_order;

/// Attribute carrying the item id on each rendered row
const TODO_ID_ATTR: &str = "data-todo-id";

/// Reorder spring (tunable, purely cosmetic)
const SPRING: SpringConfig = SpringConfig {
    stiffness: 120.0,
    damping: 25.0,
};

/// The full item list in display order
#[component]
pub fn TodoItemsList() -> impl IntoView {
    let ctx = use_todo_items();
    let list_ref = NodeRef::<Ul>::new();

    let sorted_items = Memo::new(move |_| display_order(&ctx.store.todo_items().read()));

    // Spring rows to their new slot whenever the display order changes
    animate_moves(
        list_ref,
        move || sorted_items.track(),
        TODO_ID_ATTR,
        SPRING,
    );

    view! {
        <ul class="todo-list" node_ref=list_ref>
            <For
                each=move || sorted_items.get()
                key=|item: &TodoItem| {
                    // Tuple of all mutable fields so edits and toggles
                    // re-render the card, not just reposition it
                    (
                        item.id.clone(),
                        item.title.clone(),
                        item.details.clone(),
                        item.done,
                    )
                }
                children=move |item: TodoItem| {
                    let id = item.id.clone();
                    view! {
                        <li class="todo-list-row" data-todo-id=id>
                            <TodoItemCard item=item />
                        </li>
                    }
                }
            />
        </ul>
    }
}
