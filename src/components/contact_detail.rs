//! Contact Detail Component
//!
//! Orchestrates the folders for the current contact: which contact is
//! shown, prev/next, the shared filter, and where field edits go.

use leptos::prelude::*;

use crate::components::{ContactHeader, FilterBar, FolderRenderer};
use crate::context::{use_app_context, use_observable};
use crate::form::{add_folder_position, FieldPatch};
use crate::models::{Contact, FolderDef};
use crate::navigation::DetailState;
use crate::observable::LoadState;
use crate::store::{store_show_contact, store_sync_cursor, use_view_store, ViewStateStoreFields};

#[component]
pub fn ContactDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_view_store();

    let contacts = use_observable(ctx.contacts.current_list());
    let schema = use_observable(ctx.schema.state());
    let layouts = use_observable(ctx.layouts.state());

    let list_len = move || contacts.with(|list| list.ready().map_or(0, |l| l.len()));

    // Clamp the cursor whenever the list changes
    Effect::new(move |_| {
        let len = list_len();
        store_sync_cursor(&store, len);
    });

    let detail_state = Memo::new(move |_| {
        let cursor = store.cursor().get();
        contacts.with(|list| cursor.state(list, |l| l.len()))
    });

    // Folders only care whether there is a list to edit, not which contact
    let list_ready = Memo::new(move |_| matches!(detail_state.get(), DetailState::Empty | DetailState::Browsing(_)));

    let record: Signal<Option<usize>> = Signal::derive(move || match detail_state.get() {
        DetailState::Browsing(index) => Some(index),
        _ => None,
    });

    let current_contact: Signal<Option<Contact>> = Signal::derive(move || match detail_state.get() {
        DetailState::Browsing(index) => contacts.with(|list| list.ready().and_then(|l| l.get(index).cloned())),
        _ => None,
    });

    // Folders in the order the active layout asks for
    let layout_provider = StoredValue::new(ctx.layouts.clone());
    let folders = Memo::new(move |_| -> LoadState<Vec<FolderDef>> {
        let key = store.active_layout().get();
        layouts.track();
        schema.with(|schema| {
            schema.map(|schema| layout_provider.with_value(|p| p.folder_order_for(&key, &schema.folders)))
        })
    });

    let contacts_store = StoredValue::new(ctx.contacts.clone());
    let on_patch = Callback::new(move |patch: FieldPatch| {
        if let DetailState::Browsing(index) = detail_state.get_untracked() {
            contacts_store.with_value(|s| s.patch(index, &patch.key, patch.value));
        } else {
            log::warn!("Ignoring edit to '{}' with no contact selected", patch.key);
        }
    });
    let on_added = Callback::new(move |index: usize| {
        let len = contacts_store.with_value(|s| s.len());
        store_show_contact(&store, index, len);
    });

    let filter = Signal::derive(move || store.filter_text().get());

    view! {
        <div class="contact-detail">
            <ContactHeader contact=current_contact detail_state=detail_state list_len=Signal::derive(list_len) />
            <FilterBar />

            {move || match detail_state.get() {
                DetailState::Loading => view! { <p class="panel-status">"Loading contacts..."</p> }.into_any(),
                DetailState::Failed(message) => view! {
                    <p class="panel-status error">"Could not load contacts: " {message}</p>
                }.into_any(),
                DetailState::Empty => view! { <p class="panel-status">"No contacts yet."</p> }.into_any(),
                DetailState::Browsing(_) => ().into_any(),
            }}

            {move || match folders.get() {
                LoadState::Loading => view! { <p class="panel-status">"Loading schema..."</p> }.into_any(),
                LoadState::Failed(message) => view! {
                    <p class="panel-status error">"Could not load schema: " {message}</p>
                }.into_any(),
                LoadState::Ready(folders) => {
                    if !list_ready.get() {
                        return ().into_any();
                    }
                    let add_position = add_folder_position(&folders);
                    folders.into_iter().enumerate().map(|(position, folder)| view! {
                        <FolderRenderer
                            folder=folder
                            contact=current_contact
                            record=record
                            filter=filter
                            default_open=true
                            allow_add={add_position == Some(position)}
                            on_patch=on_patch
                            on_added=on_added
                        />
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}
