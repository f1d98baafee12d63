//! Local To-Do Page
//!
//! Tasks live only in the page's store; every action applies immediately.

use leptos::prelude::*;

use crate::actions::{add_local, delete_local, toggle_local};
use crate::commands::BrowserDialogs;
use crate::components::{NewTaskForm, TaskList};
use crate::store::{RowKey, TodoStore};

#[component]
pub fn LocalTodo(store: TodoStore) -> impl IntoView {
    let on_add = Callback::new(move |_: ()| {
        add_local(&store, &BrowserDialogs);
    });
    let on_toggle = Callback::new(move |key: RowKey| {
        toggle_local(&store, key);
    });
    let on_delete = Callback::new(move |key: RowKey| {
        delete_local(&store, &BrowserDialogs, key);
    });

    view! {
        <section class="todo-page local">
            <h1>"To-Do List"</h1>
            <NewTaskForm store=store on_add=on_add />
            <TaskList store=store on_toggle=on_toggle on_delete=on_delete />
        </section>
    }
}
