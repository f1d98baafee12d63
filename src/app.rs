//! To-Do Frontend App
//!
//! Tab bar on top, the selected to-do page below.

use leptos::prelude::*;

use crate::components::{LocalTodo, SyncedTodo, VariantTabBar};
use crate::context::{AppConfig, Variant};
use crate::store::new_todo_store;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    let (variant, set_variant) = signal(config.initial_variant);

    // Provide config to all children
    provide_context(config);

    // Owned here so the local list survives switching tabs
    let local_store = new_todo_store();

    view! {
        <div class="app-layout">
            <VariantTabBar current=variant set_current=set_variant />

            {move || match variant.get() {
                Variant::Local => view! { <LocalTodo store=local_store /> }.into_any(),
                Variant::Synced => view! { <SyncedTodo /> }.into_any(),
            }}
        </div>
    }
}
