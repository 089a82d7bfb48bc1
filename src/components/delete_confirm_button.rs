//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete: a × button that arms an inline "Delete? ✓ ✗" prompt.
///
/// Clicks do not propagate, so the button can sit inside clickable rows.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }>"✓"</button>
                    <button class="cancel-btn" on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class=button_class.clone() title="Delete" on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }>"×"</button>
            }
            .into_any()
        }
    }
}
