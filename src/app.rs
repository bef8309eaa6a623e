//! Todo Cards App
//!
//! Root component: the store provider wrapped around the add form and
//! the item list.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoItemsList};
use crate::context::TodoItemsProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TodoItemsProvider>
            <main class="todo-app">
                <h1>"Todo Cards"</h1>
                <NewTodoForm />
                <TodoItemsList />
            </main>
        </TodoItemsProvider>
    }
}
