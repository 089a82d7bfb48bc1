//! Dashboard Page
//!
//! Completion overview and the most recently finished todos.

use chrono::Local;
use leptos::prelude::*;

use crate::components::StatCard;
use crate::config::RECENT_COMPLETED_LIMIT;
use crate::models::TodoStats;
use crate::store::{use_todo_store, TodoStateStoreFields};
use crate::todos::recently_completed;

/// Dashboard page component
#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_todo_store();

    let stats = Memo::new(move |_| store.todos().with(|todos| TodoStats::from_todos(todos)));
    let recent = Memo::new(move |_| {
        store.todos().with(|todos| recently_completed(todos, RECENT_COMPLETED_LIMIT))
    });

    view! {
        <section class="dashboard-view">
            <h1>"Dashboard"</h1>

            <div class="stat-grid">
                <StatCard label="Total" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard label="Completed" value=Signal::derive(move || stats.get().completed.to_string()) />
                <StatCard label="Remaining" value=Signal::derive(move || stats.get().remaining.to_string()) />
                <StatCard
                    label="Done"
                    value=Signal::derive(move || format!("{}%", stats.get().completion_rate()))
                />
            </div>

            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", stats.get().completion_rate())
                />
            </div>

            <h2>"Recently completed"</h2>
            <Show
                when=move || !recent.get().is_empty()
                fallback=|| view! { <p class="empty-list">"Nothing completed yet."</p> }
            >
                <ul class="recent-list">
                    <For
                        each=move || recent.get()
                        key=|todo| (todo.id, todo.completed_at)
                        children=move |todo| {
                            let when = todo
                                .completed_at
                                .map(|at| at.with_timezone(&Local).format("%b %d, %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <li class="recent-item">
                                    <span class="todo-title">{todo.title}</span>
                                    <span class="todo-completed-at">{when}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
