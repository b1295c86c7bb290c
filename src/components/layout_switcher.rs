//! Layout Switcher Component
//!
//! Tab bar of named layouts plus the columns of the selected one.

use leptos::prelude::*;

use crate::components::{ContactDetail, ConversationsPanel, NotesPanel, TasksPanel};
use crate::context::{use_app_context, use_observable};
use crate::layout;
use crate::models::{Column, PageLayout, SectionKey};
use crate::observable::LoadState;
use crate::store::{store_set_layout, use_view_store, ViewStateStoreFields};

fn section_view(key: SectionKey) -> AnyView {
    match key {
        SectionKey::ContactDetails => view! { <ContactDetail /> }.into_any(),
        SectionKey::Conversations => view! { <ConversationsPanel /> }.into_any(),
        SectionKey::Notes => view! { <NotesPanel /> }.into_any(),
        SectionKey::Tasks => view! { <TasksPanel /> }.into_any(),
    }
}

fn column_view(column: Column) -> impl IntoView {
    view! {
        <div class=format!("layout-column column-{}", column.key.as_str())>
            {column.sections.into_iter().map(|section| view! {
                <div class="layout-section" data-section=section.key.title()>
                    {section_view(section.key)}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn LayoutSwitcher() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_view_store();
    let layouts = use_observable(ctx.layouts.state());

    let keys = Memo::new(move |_| layouts.with(|state| state.ready().map(|map| layout::layout_keys(map)).unwrap_or_default()));

    // Selected layout with repeated sections dropped
    let active: Memo<LoadState<Option<PageLayout>>> = Memo::new(move |_| {
        let key = store.active_layout().get();
        layouts.with(|state| {
            state.map(|map| {
                let found = layout::resolve(map, &key)?;
                let duplicates = found.duplicate_sections();
                if duplicates.is_empty() {
                    return Some(found.clone());
                }
                log::warn!("Layout '{}' places {:?} more than once; keeping the first", key, duplicates);
                Some(found.deduplicated())
            })
        })
    });

    view! {
        <div class="layout-switcher">
            <nav class="layout-tabs">
                <For
                    each=move || keys.get()
                    key=|k| k.clone()
                    children=move |key| {
                        let tab_key = key.clone();
                        let is_active = move || store.active_layout().with(|active| active == &tab_key);
                        let chosen = key.clone();
                        view! {
                            <button
                                class="layout-tab"
                                class:active=is_active
                                on:click=move |_| store_set_layout(&store, chosen.clone())
                            >
                                {key}
                            </button>
                        }
                    }
                />
            </nav>

            {move || match active.get() {
                LoadState::Loading => view! { <p class="panel-status">"Loading layouts..."</p> }.into_any(),
                LoadState::Failed(message) => view! {
                    <p class="panel-status error">"Could not load layouts: " {message}</p>
                }.into_any(),
                LoadState::Ready(None) => {
                    log::warn!("Unknown layout '{}'", store.active_layout().get_untracked());
                    ().into_any()
                }
                LoadState::Ready(Some(page)) => view! {
                    <main class="layout-columns">
                        {page.columns.into_iter().map(column_view).collect_view()}
                    </main>
                }.into_any(),
            }}
        </div>
    }
}
