//! Notes Panel Component
//!
//! Note bodies are Markdown.

use leptos::prelude::*;

use crate::components::activity_panel::{ready_len, status_view, PanelHeader};
use crate::context::{use_app_context, use_observable};
use crate::format;
use crate::markdown::parse_markdown;

#[component]
pub fn NotesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notes = use_observable(ctx.notes.state());

    view! {
        <section class="panel notes-panel">
            <PanelHeader title="Notes" count=Signal::derive(move || notes.with(ready_len)) />
            {move || notes.with(|state| status_view(state, "notes"))}
            <ul class="panel-list">
                <For
                    each=move || notes.with(|s| s.ready().map(|l| l.to_vec()).unwrap_or_default())
                    key=|n| n.id
                    children=move |note| {
                        view! {
                            <li class="note">
                                <div class="note-meta">
                                    <span class="note-author">{note.author.clone()}</span>
                                    <span class="note-time">{format::timestamp(&note.created_at)}</span>
                                </div>
                                <div class="note-body markdown" inner_html=parse_markdown(&note.body)></div>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
