//! Filter Bar Component
//!
//! Shared text filter applied to every folder's fields.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_view_store();
    let placeholder = use_app_context().config.filter_placeholder.clone();

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-input"
                placeholder=placeholder
                prop:value=move || store.filter_text().get()
                on:input=move |ev| store.filter_text().set(event_target_value(&ev))
            />
            <Show when=move || !store.filter_text().with(|f| f.is_empty())>
                <button class="filter-clear" on:click=move |_| store.filter_text().set(String::new())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
