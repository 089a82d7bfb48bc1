//! Todo Virtual List Component
//!
//! Scroll container that renders only the todos in view.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::config::TODO_ROW_HEIGHT;
use crate::models::Todo;
use crate::virtual_list::{use_virtual_list, VirtualListOptions};

/// Virtualized list of todos
#[component]
pub fn TodoVirtualList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
) -> impl IntoView {
    let list = use_virtual_list(todos, VirtualListOptions::new(TODO_ROW_HEIGHT));
    let visible_items = list.visible_items;
    let total_height = list.total_height;

    view! {
        <div
            class="virtual-list"
            node_ref=list.container_ref
            on:scroll=list.on_scroll()
        >
            <div
                class="virtual-list-inner"
                style=move || format!("position: relative; height: {}px;", total_height.get())
            >
                <For
                    each=move || visible_items.get()
                    // completed is part of the key so toggled rows re-render
                    key=|row| (row.item.id, row.index, row.item.completed)
                    children=move |row| {
                        view! { <TodoRow todo=row.item style=row.style.to_css() /> }
                    }
                />
            </div>
        </div>
        <Show when=move || todos.with(|todos| todos.is_empty())>
            <p class="empty-list">"Nothing here."</p>
        </Show>
    }
}
