//! Activity Panel Frame
//!
//! Shared header and load-state handling for the read-only panels.

use std::sync::Arc;

use leptos::prelude::*;

use crate::observable::LoadState;
use crate::providers::Shared;

/// Panel title with an item count once loaded
#[component]
pub fn PanelHeader(title: &'static str, #[prop(into)] count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <header class="panel-header">
            <h3 class="panel-title">{title}</h3>
            {move || count.get().map(|n| view! { <span class="panel-count">{n}</span> })}
        </header>
    }
}

/// Status line for anything but a non-empty list; `None` means render the list
pub fn status_view<T>(state: &Shared<Vec<T>>, noun: &'static str) -> Option<AnyView> {
    match state {
        LoadState::Loading => Some(view! { <p class="panel-status">{format!("Loading {}...", noun)}</p> }.into_any()),
        LoadState::Failed(message) => Some(
            view! { <p class="panel-status error">{format!("Could not load {}: {}", noun, message)}</p> }.into_any(),
        ),
        LoadState::Ready(items) if items.is_empty() => {
            Some(view! { <p class="panel-status">{format!("No {}.", noun)}</p> }.into_any())
        }
        LoadState::Ready(_) => None,
    }
}

pub fn ready_len<T>(state: &Shared<Vec<T>>) -> Option<usize> {
    state.ready().map(|items: &Arc<Vec<T>>| items.len())
}
