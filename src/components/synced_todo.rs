//! Synced To-Do Page
//!
//! Tasks are persisted through `/api/tasks`. The list changes only after the
//! server confirmed a request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{add_synced, delete_synced, load_synced, toggle_synced};
use crate::commands::{BrowserDialogs, HttpTaskApi};
use crate::components::{NewTaskForm, TaskList};
use crate::context::AppConfig;
use crate::store::{new_todo_store, RowKey};

#[component]
pub fn SyncedTodo() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let api = HttpTaskApi::new(config.api_base);
    // Fresh store on every mount; the server holds the real list
    let store = new_todo_store();

    // Load tasks on mount
    let load_api = api.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        spawn_local(async move {
            let _ = load_synced(&api, &store).await;
        });
    });

    let add_api = api.clone();
    let on_add = Callback::new(move |_: ()| {
        let api = add_api.clone();
        spawn_local(async move {
            add_synced(&api, &store, &BrowserDialogs).await;
        });
    });

    let toggle_api = api.clone();
    let on_toggle = Callback::new(move |key: RowKey| {
        let api = toggle_api.clone();
        spawn_local(async move {
            toggle_synced(&api, &store, key).await;
        });
    });

    let on_delete = Callback::new(move |key: RowKey| {
        let api = api.clone();
        spawn_local(async move {
            delete_synced(&api, &store, &BrowserDialogs, key).await;
        });
    });

    view! {
        <section class="todo-page synced">
            <h1>"To-Do List"</h1>
            <NewTaskForm store=store on_add=on_add />
            <TaskList store=store on_toggle=on_toggle on_delete=on_delete />
        </section>
    }
}
