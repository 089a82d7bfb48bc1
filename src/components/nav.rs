//! Navigation Component
//!
//! Header bar with a link for every route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="app-nav">
            <span class="app-brand">"Todo"</span>
            {AppRoute::ALL.into_iter().map(|route| view! {
                <span class="nav-link" data-route=route.name()>
                    <A href=route.path() exact=true>{route.label()}</A>
                </span>
            }).collect_view()}
        </nav>
    }
}
