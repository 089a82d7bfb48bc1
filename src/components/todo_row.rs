//! Todo Row Component
//!
//! A single todo in the virtual list.

use chrono::Local;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, use_todo_store};

/// A single todo row, absolutely positioned by the virtual list
#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] style: String,
) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let completed_at = todo
        .completed_at
        .map(|at| at.with_timezone(&Local).format("%b %d, %H:%M").to_string());

    view! {
        <div
            class=if completed { "todo-row completed" } else { "todo-row" }
            style=style
        >
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| store_toggle_todo(&store, id)
            />

            <span class="todo-title">{todo.title}</span>

            {completed_at.map(|at| view! { <span class="todo-completed-at">{at}</span> })}

            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| store_remove_todo(&store, id)
            />
        </div>
    }
}
