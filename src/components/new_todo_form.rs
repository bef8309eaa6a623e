//! New Todo Form Component
//!
//! Entry form for adding items to the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_items;
use crate::models::NewTodoItem;
use crate::state::TodoAction;

/// Form for creating new todo items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_items();

    let (title, set_title) = signal(String::new());
    let (details, set_details) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get().trim().to_string();
        // Empty titles never reach the reducer
        if title_text.is_empty() {
            return;
        }
        let details_text = details.get().trim().to_string();
        ctx.dispatch(TodoAction::Add(NewTodoItem {
            title: title_text,
            details: (!details_text.is_empty()).then_some(details_text),
            done: None,
        }));
        set_title.set(String::new());
        set_details.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                class="new-todo-title"
                placeholder="Add a new todo..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <input
                type="text"
                class="new-todo-details"
                placeholder="Details (optional)"
                prop:value=move || details.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_details.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
