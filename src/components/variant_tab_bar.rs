//! Variant Tab Bar Component
//!
//! Switches between the local and the synced to-do page.

use leptos::prelude::*;

use crate::context::Variant;

#[component]
pub fn VariantTabBar(
    current: ReadSignal<Variant>,
    set_current: WriteSignal<Variant>,
) -> impl IntoView {
    view! {
        <div class="variant-tab-bar">
            {Variant::ALL.into_iter().map(|variant| {
                let is_active = move || current.get() == variant;
                let tab_class = move || {
                    if is_active() { "variant-tab active" } else { "variant-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        data-variant=variant.as_str()
                        on:click=move |_| set_current.set(variant)
                    >
                        {variant.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
