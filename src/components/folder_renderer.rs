//! Folder Renderer Component
//!
//! One collapsible schema folder: filtered fields, expand/collapse and the
//! add-contact flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldRenderer;
use crate::context::use_app_context;
use crate::form::{rendered_fields, FieldPatch, FolderState};
use crate::models::{Contact, FieldValue, FolderDef, FolderIcon};

fn icon_glyph(icon: Option<FolderIcon>) -> &'static str {
    match icon {
        Some(FolderIcon::User) => "👤",
        Some(FolderIcon::Info) => "ℹ",
        None => "•",
    }
}

/// Collapsible folder of fields
///
/// # Arguments
/// * `folder` - Schema folder to render
/// * `contact` - Live contact being browsed, if any
/// * `record` - Index of the contact being shown
/// * `filter` - Shared field filter text
/// * `on_patch` - Applies a field change to the live contact
/// * `on_added` - Receives the index of a newly created contact
#[component]
pub fn FolderRenderer(
    folder: FolderDef,
    #[prop(into)] contact: Signal<Option<Contact>>,
    #[prop(into)] record: Signal<Option<usize>>,
    #[prop(into)] filter: Signal<String>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] allow_add: bool,
    #[prop(into)] on_patch: Callback<FieldPatch>,
    #[prop(into)] on_added: Callback<usize>,
) -> impl IntoView {
    let store = StoredValue::new(use_app_context().contacts);
    let state = RwSignal::new(FolderState::new(default_open));

    let fields = folder.fields.clone();
    let visible = Memo::new(move |_| filter.with(|text| rendered_fields(&fields, text)));

    let adding = move || state.with(FolderState::is_adding);

    let on_toggle = move |_| {
        let mut toggled = false;
        state.update(|s| toggled = s.toggle());
        if !toggled {
            log::debug!("Folder toggle ignored while adding a contact");
        }
    };

    let on_field_value_change = move |key: String, value: Option<FieldValue>| {
        let mut patch = None;
        state.update(|s| patch = s.on_field_value_change(&key, value));
        if let Some(patch) = patch {
            on_patch.run(patch);
        }
    };

    let save_add = move |_| {
        let mut draft = None;
        state.update(|s| draft = s.start_save());
        let Some(draft) = draft else { return };
        let store = store.get_value();
        spawn_local(async move {
            match store.add(draft).await {
                Ok(index) => {
                    state.update(FolderState::save_succeeded);
                    on_added.run(index);
                }
                Err(e) => {
                    log::error!("Failed to add contact: {}", e);
                    state.update(|s| s.save_failed(e.to_string()));
                }
            }
        });
    };

    let name = folder.name.clone();
    let icon = icon_glyph(folder.icon);

    view! {
        <section class="folder" class:open=move || state.with(FolderState::is_open) class:adding=adding>
            <header class="folder-header" on:click=on_toggle>
                <span class="folder-icon">{icon}</span>
                <span class="folder-title">{name}</span>
                <span class="folder-chevron">{move || if state.with(FolderState::is_open) { "▼" } else { "▶" }}</span>
                <Show when=move || allow_add && !adding()>
                    <button
                        class="folder-add-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            state.update(FolderState::begin_add);
                        }
                    >
                        "+ New contact"
                    </button>
                </Show>
            </header>

            <Show when=move || state.with(FolderState::is_open)>
                <div class="folder-body">
                    <For
                        each=move || visible.get()
                        key=|field| field.key.clone()
                        children=move |field| {
                            let key = field.key.clone();
                            let value_key = key.clone();
                            let value = Signal::derive(move || {
                                state.with(|s| match s.draft() {
                                    Some(draft) => draft.get(&value_key).cloned(),
                                    None => contact.with(|c| c.as_ref().and_then(|c| c.get(&value_key).cloned())),
                                })
                            });
                            view! {
                                <FieldRenderer
                                    field=field
                                    value=value
                                    inline_edit=Signal::derive(adding)
                                    record=record
                                    on_change={move |v: Option<FieldValue>| on_field_value_change(key.clone(), v)}
                                />
                            }
                        }
                    />
                    <Show when=move || visible.with(Vec::is_empty) && !filter.with(|f| f.trim().is_empty())>
                        <p class="folder-empty">"No matching fields"</p>
                    </Show>

                    <Show when=adding>
                        <div class="folder-add-actions">
                            {move || state.with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
                                <p class="folder-error">"Could not save: " {e}</p>
                            })}
                            <button
                                class="save-btn"
                                disabled=move || state.with(FolderState::is_saving)
                                on:click=save_add
                            >
                                {move || if state.with(FolderState::is_saving) { "Saving..." } else { "Save contact" }}
                            </button>
                            <button
                                class="cancel-btn"
                                disabled=move || state.with(FolderState::is_saving)
                                on:click=move |_| state.update(FolderState::cancel_add)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
