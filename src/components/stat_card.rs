//! Stat Card Component

use leptos::prelude::*;

/// A labelled number on the dashboard
#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
