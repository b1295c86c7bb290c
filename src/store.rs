//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the UI
//! state that must survive a layout switch remounting the views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::navigation::ContactCursor;

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Name of the selected layout
    pub active_layout: String,
    /// Filter text shared by every folder
    pub filter_text: String,
    /// Contact shown in the detail view
    pub cursor: ContactCursor,
}

impl ViewState {
    pub fn new(default_layout: &str) -> Self {
        Self {
            active_layout: default_layout.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch the active layout
pub fn store_set_layout(store: &ViewStore, key: String) {
    log::info!("Switching layout to '{}'", key);
    store.active_layout().set(key);
}

/// Clamp the cursor after the contact list changed
pub fn store_sync_cursor(store: &ViewStore, len: usize) {
    let current = store.cursor().get_untracked();
    let mut clamped = current;
    clamped.sync(len);
    if clamped != current {
        store.cursor().set(clamped);
    }
}

pub fn store_prev_contact(store: &ViewStore) {
    store.cursor().write().prev();
}

pub fn store_next_contact(store: &ViewStore, len: usize) {
    store.cursor().write().next(len);
}

/// Show the contact at `index` (e.g. one just created)
pub fn store_show_contact(store: &ViewStore, index: usize, len: usize) {
    store.cursor().write().show(index, len);
}
