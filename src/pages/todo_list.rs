//! Todo List Page
//!
//! Add, filter, toggle and remove todos.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTodoForm, TodoVirtualList};
use crate::models::{TodoFilter, TodoStats};
use crate::store::{store_clear_completed, use_todo_store, TodoStateStoreFields};
use crate::todos::filter_todos;

/// Todo list page component
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();
    let (filter, set_filter) = signal(TodoFilter::All);

    let visible = Signal::derive(move || {
        let filter = filter.get();
        store.todos().with(|todos| filter_todos(todos, filter))
    });
    let stats = Memo::new(move |_| store.todos().with(|todos| TodoStats::from_todos(todos)));

    view! {
        <section class="todo-list-view">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <FilterBar filter=filter set_filter=set_filter />

            <TodoVirtualList todos=visible />

            <div class="todo-footer">
                <p class="item-count">
                    {move || {
                        let stats = stats.get();
                        format!("{} todos, {} remaining", stats.total, stats.remaining)
                    }}
                </p>
                <Show when=move || stats.get().has_completed()>
                    <button
                        class="clear-completed-btn"
                        on:click=move |_| store_clear_completed(&store)
                    >
                        "Clear completed"
                    </button>
                </Show>
            </div>
        </section>
    }
}
