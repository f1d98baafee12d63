//! New Task Form Component
//!
//! Text field plus add button. Submitting (button or Enter) runs the page's add handler.

use leptos::prelude::*;

use crate::store::{TodoStore, TodoStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm(
    store: TodoStore,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(());
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                id="taskInput"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || store.input().get()
                on:input=move |ev| *store.input().write() = event_target_value(&ev)
            />
            <button id="addTaskBtn" type="submit">"Add"</button>
        </form>
    }
}
