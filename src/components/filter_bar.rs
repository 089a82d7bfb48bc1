//! Filter Bar Component
//!
//! Tab bar for switching between all, active and completed todos.

use leptos::prelude::*;

use crate::models::TodoFilter;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Filter tabs with per-filter counts
#[component]
pub fn FilterBar(
    filter: ReadSignal<TodoFilter>,
    set_filter: WriteSignal<TodoFilter>,
) -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-bar">
            {TodoFilter::ALL.into_iter().map(|f| {
                let count = move || {
                    store.todos().with(|todos| todos.iter().filter(|t| f.matches(t)).count())
                };
                let tab_class = move || {
                    if filter.get() == f { "filter-tab active" } else { "filter-tab" }
                };

                view! {
                    <button class=tab_class on:click=move |_| set_filter.set(f)>
                        {f.label()} " (" {count} ")"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
