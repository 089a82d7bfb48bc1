//! New Todo Form Component
//!
//! Form for adding a todo to the top of the list.

use leptos::prelude::*;

use crate::models::NewTodo;
use crate::store::{store_add_todo, use_todo_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        let title = title.trim();
        if title.is_empty() { return; }

        store_add_todo(&store, NewTodo::new(title));
        set_new_title.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
