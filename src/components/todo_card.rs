//! Todo Card Component
//!
//! A single item rendered as a card: checkbox and label in display
//! mode, title/details fields in edit mode.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_items;
use crate::models::{TodoEditValue, TodoItem};
use crate::state::TodoAction;

/// One todo card with an inline edit mode
#[component]
pub fn TodoItemCard(item: TodoItem) -> impl IntoView {
    let ctx = use_todo_items();

    // Edit mode is transient view state, never persisted
    let (editable, set_editable) = signal(false);
    let (title_value, set_title_value) = signal(item.title.clone());
    let (details_value, set_details_value) = signal(item.details.clone().unwrap_or_default());

    let toggle_id = item.id.clone();
    let handle_toggle_done = move |_| {
        ctx.dispatch(TodoAction::ToggleDone {
            id: toggle_id.clone(),
        });
    };

    let delete_id = item.id.clone();
    let handle_delete = move |_| {
        ctx.dispatch(TodoAction::Delete {
            id: delete_id.clone(),
        });
    };

    let edit_id = item.id.clone();
    let submit_edit = move || {
        let title = title_value.get().trim().to_string();
        let details = details_value.get().trim().to_string();
        // Both fields are required; an empty title never reaches the reducer
        if title.is_empty() || details.is_empty() {
            return;
        }
        ctx.dispatch(TodoAction::Edit {
            id: edit_id.clone(),
            value: TodoEditValue {
                title,
                details: Some(details),
            },
        });
        set_editable.set(false);
    };
    let confirm_edit = submit_edit.clone();
    let submit_form = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_edit();
    };

    let card_class = if item.done {
        "todo-card done"
    } else {
        "todo-card"
    };
    let done = item.done;
    let title = item.title.clone();
    let details = item.details.clone().filter(|d| !d.is_empty());

    view! {
        <div class=card_class>
            <div class="todo-card-header">
                <Show
                    when=move || editable.get()
                    fallback={
                        let title = title.clone();
                        let handle_toggle_done = handle_toggle_done.clone();
                        move || view! {
                            <label class="todo-card-label">
                                <input
                                    type="checkbox"
                                    checked=done
                                    on:change=handle_toggle_done.clone()
                                />
                                <span class="todo-card-title">{title.clone()}</span>
                            </label>
                        }
                    }
                >
                    {
                        let submit_form = submit_form.clone();
                        view! {
                            <form class="todo-card-edit" on:submit=submit_form>
                                <input
                                    type="text"
                                    class="todo-edit-title"
                                    placeholder="Title"
                                    prop:value=move || title_value.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_title_value.set(input.value());
                                    }
                                />
                                <textarea
                                    class="todo-edit-details"
                                    placeholder="Details"
                                    prop:value=move || details_value.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                        set_details_value.set(input.value());
                                    }
                                ></textarea>
                            </form>
                        }
                    }
                </Show>

                <div class="todo-card-actions">
                    <Show
                        when=move || editable.get()
                        fallback=move || view! {
                            <button
                                class="edit-btn"
                                on:click=move |_| set_editable.update(|e| *e = !*e)
                            >
                                "✎"
                            </button>
                        }
                    >
                        {
                            let confirm_edit = confirm_edit.clone();
                            view! {
                                <button
                                    class="confirm-btn"
                                    on:click=move |_| confirm_edit()
                                >
                                    "✓"
                                </button>
                            }
                        }
                    </Show>
                    <button class="delete-btn" on:click=handle_delete>"×"</button>
                </div>
            </div>

            {details.map(|text| view! {
                <Show when=move || !editable.get()>
                    <p class="todo-card-details">{text.clone()}</p>
                </Show>
            })}
        </div>
    }
}
