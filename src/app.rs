//! Todo App
//!
//! Root component: provides the store and maps routes to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::StaticSegment;

use crate::components::Nav;
use crate::pages::{DashboardView, TodoListView};
use crate::routes::AppRoute;
use crate::store::{provide_todo_store, TodoState};

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_todo_store(TodoState::seeded());

    view! {
        <Router>
            <div class="app-layout">
                <Nav />

                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=StaticSegment(AppRoute::Todo.segment()) view=TodoListView />
                        <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardView />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Shown for paths outside the route table
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page Not Found"</h1>
            <A href=AppRoute::Todo.path()>"Back to todos"</A>
        </section>
    }
}
