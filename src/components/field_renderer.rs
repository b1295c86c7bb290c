//! Field Renderer Component
//!
//! Displays one schema field and edits it in place. Every change leaves
//! through `on_change`; the parent decides where the value goes.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

use crate::form::{is_empty, toggle_multi_select_option, FieldEditor};
use crate::models::{FieldDef, FieldType, FieldValue};

/// Distinguishes radio groups of the same field rendered twice
static GROUP_SEQ: AtomicUsize = AtomicUsize::new(0);

fn text_of(value: &Option<FieldValue>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Read-only rendering of a non-empty value
fn display_view(field_type: FieldType, value: FieldValue) -> AnyView {
    let text = value.to_string();
    match field_type {
        FieldType::Phone => view! { <a class="field-link" href=format!("tel:{}", text)>{text.clone()}</a> }.into_any(),
        FieldType::Email => view! { <a class="field-link" href=format!("mailto:{}", text)>{text.clone()}</a> }.into_any(),
        FieldType::StringMultiline => view! { <pre class="field-multiline">{text}</pre> }.into_any(),
        FieldType::MultiSelect => {
            let items = value.as_list().map(<[String]>::to_vec).unwrap_or_default();
            view! {
                <div class="field-chips">
                    {items.into_iter().map(|item| view! { <span class="chip">{item}</span> }).collect_view()}
                </div>
            }
            .into_any()
        }
        FieldType::String | FieldType::Radio => view! { <span class="field-text">{text}</span> }.into_any(),
    }
}

/// Input widget for the field's type
fn editor_view(field: &FieldDef, value: Signal<Option<FieldValue>>, on_change: Callback<Option<FieldValue>>) -> AnyView {
    let emit_text = move |ev| on_change.run(Some(FieldValue::Text(event_target_value(&ev))));

    match field.field_type {
        FieldType::String | FieldType::Phone | FieldType::Email => {
            let input_type = match field.field_type {
                FieldType::Phone => "tel",
                FieldType::Email => "email",
                _ => "text",
            };
            view! {
                <input
                    class="field-input"
                    type=input_type
                    placeholder=field.label.clone()
                    prop:value=move || text_of(&value.get())
                    on:input=emit_text
                />
            }
            .into_any()
        }
        FieldType::StringMultiline => view! {
            <textarea
                class="field-input field-textarea"
                rows="3"
                placeholder=field.label.clone()
                prop:value=move || text_of(&value.get())
                on:input=emit_text
            />
        }
        .into_any(),
        FieldType::Radio => {
            let group = format!("{}-{}", field.key, GROUP_SEQ.fetch_add(1, Ordering::Relaxed));
            view! {
                <div class="field-choices">
                    {field.options().iter().cloned().map(|option| {
                        let checked_option = option.clone();
                        let chosen = option.clone();
                        view! {
                            <label class="field-choice">
                                <input
                                    type="radio"
                                    name=group.clone()
                                    prop:checked=move || value.get().as_ref().and_then(FieldValue::as_text) == Some(checked_option.as_str())
                                    on:change=move |_| on_change.run(Some(FieldValue::Text(chosen.clone())))
                                />
                                {option}
                            </label>
                        }
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
        FieldType::MultiSelect => view! {
            <div class="field-choices">
                {field.options().iter().cloned().map(|option| {
                    let checked_option = option.clone();
                    let toggled = option.clone();
                    view! {
                        <label class="field-choice">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    value.get().as_ref().and_then(FieldValue::as_list).is_some_and(|items| items.contains(&checked_option))
                                }
                                on:change=move |ev| {
                                    let included = event_target_checked(&ev);
                                    let next = toggle_multi_select_option(value.get_untracked().as_ref(), &toggled, included);
                                    on_change.run(Some(FieldValue::List(next)));
                                }
                            />
                            {option}
                        </label>
                    }
                }).collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// One labeled field with display and edit modes
///
/// # Arguments
/// * `field` - Schema definition of the field
/// * `value` - Current value (absent when the record has no such key)
/// * `on_change` - Receives every new value, including the restore on cancel
/// * `inline_edit` - Always show the editor (new-contact drafts)
/// * `record` - Index of the contact being shown; an open edit stays with it
#[component]
pub fn FieldRenderer(
    field: FieldDef,
    #[prop(into)] value: Signal<Option<FieldValue>>,
    #[prop(into)] on_change: Callback<Option<FieldValue>>,
    #[prop(into)] inline_edit: Signal<bool>,
    #[prop(into)] record: Signal<Option<usize>>,
) -> impl IntoView {
    let editor = RwSignal::new(FieldEditor::default());
    let editing = move || {
        let record = record.get();
        editor.with(|e| e.is_editing(record))
    };
    let show_editor = move || inline_edit.get() || editing();

    let begin_edit = move |_| editor.update(|e| e.begin(record.get_untracked(), value.get_untracked()));
    let commit_edit = move |_| editor.update(FieldEditor::commit);
    let cancel_edit = move |_| {
        let mut restore = None;
        let record = record.get_untracked();
        editor.update(|e| restore = e.cancel(record));
        if let Some(previous) = restore {
            on_change.run(previous);
        }
    };

    let label = field.label.clone();
    let field_type = field.field_type;
    let field_for_editor = field.clone();

    view! {
        <div class="field-row" class:editing=show_editor>
            <label class="field-label">{label}</label>
            <div class="field-value">
                {move || if show_editor() {
                    editor_view(&field_for_editor, value, on_change)
                } else {
                    let current = value.get();
                    if is_empty(current.as_ref()) {
                        view! { <span class="field-placeholder">"Not set"</span> }.into_any()
                    } else {
                        current.map(|v| display_view(field_type, v)).into_any()
                    }
                }}
            </div>
            <div class="field-actions">
                {move || {
                    if inline_edit.get() {
                        ().into_any()
                    } else if editing() {
                        view! {
                            <button class="field-btn save" on:click=commit_edit>"Save"</button>
                            <button class="field-btn cancel" on:click=cancel_edit>"Cancel"</button>
                        }.into_any()
                    } else {
                        view! { <button class="field-btn edit" on:click=begin_edit>"Edit"</button> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
