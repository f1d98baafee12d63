//! Task List Component
//!
//! Renders the rows of a to-do page in the order they are stored.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{RowKey, TodoStore, TodoStateStoreFields};

/// Task list with a summary line
#[component]
pub fn TaskList(
    store: TodoStore,
    #[prop(into)] on_toggle: Callback<RowKey>,
    #[prop(into)] on_delete: Callback<RowKey>,
) -> impl IntoView {
    let rows = move || store.rows().get();

    let summary = move || {
        store.with(|state| format!("{} tasks, {} completed", state.len(), state.completed_count()))
    };

    view! {
        <ul id="taskList" class="task-list">
            <For
                each=rows
                // completed is part of the key so a toggle re-renders the row
                key=|row| (row.key, row.task.completed)
                children=move |row| view! {
                    <TaskRow row=row on_toggle=on_toggle on_delete=on_delete />
                }
            />
        </ul>
        <p class="task-count">{summary}</p>
    }
}
