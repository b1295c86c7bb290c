//! Data Providers
//!
//! Read-only feeds (schema, layouts, activities) fetched once per process
//! and shared by every subscriber. The held value survives even when no
//! view is subscribed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{self, ApiClient};
use crate::layout;
use crate::models::{Conversation, FolderDef, LayoutMap, Note, PageLayout, Schema, Task};
use crate::observable::{LoadState, Observable};

pub type Shared<T> = LoadState<Arc<T>>;

/// A cached, shareable GET feed
pub struct Provider<T> {
    path: &'static str,
    client: ApiClient,
    state: Observable<Shared<T>>,
    requested: Arc<AtomicBool>,
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            client: self.client.clone(),
            state: self.state.clone(),
            requested: Arc::clone(&self.requested),
        }
    }
}

impl<T: DeserializeOwned + Send + Sync + 'static> Provider<T> {
    pub fn new(client: ApiClient, path: &'static str) -> Self {
        Self {
            path,
            client,
            state: Observable::new(LoadState::Loading),
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &Observable<Shared<T>> {
        &self.state
    }

    #[cfg(test)]
    pub fn subscribe(
        &self,
        listener: impl Fn(&Shared<T>) + Send + Sync + 'static,
    ) -> crate::observable::Subscription<Shared<T>> {
        self.state.subscribe(listener)
    }

    /// Fetch the feed. Only the first call does any work.
    pub async fn load(&self) {
        if self.requested.swap(true, Ordering::SeqCst) {
            return;
        }
        match self.client.get::<T>(self.path).await {
            Ok(value) => {
                log::info!("Loaded {}", self.path);
                self.state.set(LoadState::Ready(Arc::new(value)));
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", self.path, e);
                self.state.set(LoadState::Failed(e.to_string()));
            }
        }
    }
}

pub type SchemaProvider = Provider<Schema>;
pub type ConversationProvider = Provider<Vec<Conversation>>;
pub type NoteProvider = Provider<Vec<Note>>;
pub type TaskProvider = Provider<Vec<Task>>;

pub fn schema_provider(client: &ApiClient) -> SchemaProvider {
    Provider::new(client.clone(), api::SCHEMA_PATH)
}

pub fn conversation_provider(client: &ApiClient) -> ConversationProvider {
    Provider::new(client.clone(), api::CONVERSATIONS_PATH)
}

pub fn note_provider(client: &ApiClient) -> NoteProvider {
    Provider::new(client.clone(), api::NOTES_PATH)
}

pub fn task_provider(client: &ApiClient) -> TaskProvider {
    Provider::new(client.clone(), api::TASKS_PATH)
}

/// Layout feed plus lookups against whatever is loaded
#[derive(Clone)]
pub struct LayoutProvider {
    feed: Provider<LayoutMap>,
}

impl LayoutProvider {
    pub fn new(client: &ApiClient) -> Self {
        Self { feed: Provider::new(client.clone(), api::LAYOUTS_PATH) }
    }

    pub fn state(&self) -> &Observable<Shared<LayoutMap>> {
        self.feed.state()
    }

    pub async fn load(&self) {
        self.feed.load().await
    }

    /// Layout by name; `None` while loading or for unknown names
    pub fn resolve(&self, key: &str) -> Option<PageLayout> {
        let state = self.feed.state().get();
        let layouts = state.ready()?;
        let resolved = layout::resolve(layouts, key).cloned();
        if resolved.is_none() {
            log::warn!("Unknown layout '{}'", key);
        }
        resolved
    }

    pub fn folder_order_for(&self, key: &str, folders: &[FolderDef]) -> Vec<FolderDef> {
        layout::folder_order_for(self.resolve(key).as_ref(), folders)
    }
}
