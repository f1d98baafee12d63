//! Delete Button Component
//!
//! Row-level delete control. The confirmation prompt belongs to the delete handler.

use leptos::prelude::*;

/// Delete control inside a task row
///
/// Stops the click from reaching the row, which would toggle it.
#[component]
pub fn DeleteButton(
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="delete-btn"
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "Delete"
        </button>
    }
}
