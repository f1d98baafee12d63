//! Task Row Component
//!
//! Individual task in the list.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::store::{Row, RowKey};

/// A single task row. Clicking the row toggles it.
#[component]
pub fn TaskRow(
    row: Row,
    #[prop(into)] on_toggle: Callback<RowKey>,
    #[prop(into)] on_delete: Callback<RowKey>,
) -> impl IntoView {
    let key = row.key;
    let completed = row.task.completed;

    view! {
        <li
            class={if completed { "task-row completed" } else { "task-row" }}
            on:click=move |_| on_toggle.run(key)
        >
            {row.task.text}
            <DeleteButton on_delete=Callback::new(move |_: ()| on_delete.run(key)) />
        </li>
    }
}
