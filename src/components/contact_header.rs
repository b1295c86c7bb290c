//! Contact Header Component
//!
//! Avatar initials, full name, position and prev/next buttons.

use leptos::prelude::*;

use crate::format::{full_name, initials, NO_NAME};
use crate::models::Contact;
use crate::navigation::DetailState;
use crate::store::{store_next_contact, store_prev_contact, use_view_store, ViewStateStoreFields};

#[component]
pub fn ContactHeader(
    #[prop(into)] contact: Signal<Option<Contact>>,
    #[prop(into)] detail_state: Signal<DetailState>,
    #[prop(into)] list_len: Signal<usize>,
) -> impl IntoView {
    let store = use_view_store();

    let name = move || contact.with(|c| c.as_ref().map(full_name)).unwrap_or_else(|| NO_NAME.to_string());
    let position = move || match detail_state.get() {
        DetailState::Browsing(index) => format!("{} / {}", index + 1, list_len.get()),
        _ => String::new(),
    };
    let can_prev = move || store.cursor().with(|c| c.can_prev());
    let can_next = move || store.cursor().with(|c| c.can_next(list_len.get()));

    view! {
        <div class="contact-header">
            <div class="avatar">{move || initials(&name())}</div>
            <div class="contact-header-text">
                <h2 class="contact-name">{name}</h2>
                <span class="contact-position">{position}</span>
            </div>
            <div class="contact-nav">
                <button
                    class="nav-btn"
                    title="Previous contact"
                    disabled=move || !can_prev()
                    on:click=move |_| store_prev_contact(&store)
                >
                    "‹"
                </button>
                <button
                    class="nav-btn"
                    title="Next contact"
                    disabled=move || !can_next()
                    on:click=move |_| store_next_contact(&store, list_len.get_untracked())
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
