//! Application Context
//!
//! Services shared via the Leptos Context API, plus the bridge from
//! `Observable` values to Leptos signals.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, Backend};
use crate::config::AppConfig;
use crate::contact_store::ContactStore;
use crate::observable::Observable;
use crate::providers::{self, ConversationProvider, LayoutProvider, NoteProvider, SchemaProvider, TaskProvider};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub contacts: ContactStore,
    pub schema: SchemaProvider,
    pub layouts: LayoutProvider,
    pub conversations: ConversationProvider,
    pub notes: NoteProvider,
    pub tasks: TaskProvider,
}

impl AppContext {
    pub fn new(config: AppConfig, backend: Arc<dyn Backend>) -> Self {
        let client = ApiClient::new(backend, config.api_latency_ms);
        Self {
            config: Arc::new(config),
            contacts: ContactStore::new(client.clone()),
            schema: providers::schema_provider(&client),
            layouts: LayoutProvider::new(&client),
            conversations: providers::conversation_provider(&client),
            notes: providers::note_provider(&client),
            tasks: providers::task_provider(&client),
        }
    }

    /// Kick off every startup fetch; each runs independently
    pub fn load_all(&self) {
        let ctx = self.clone();
        spawn_local(async move { ctx.layouts.load().await });
        let ctx = self.clone();
        spawn_local(async move { ctx.schema.load().await });
        let ctx = self.clone();
        spawn_local(async move { ctx.contacts.load().await });
        let ctx = self.clone();
        spawn_local(async move { ctx.conversations.load().await });
        let ctx = self.clone();
        spawn_local(async move { ctx.notes.load().await });
        let ctx = self.clone();
        spawn_local(async move { ctx.tasks.load().await });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Mirror an `Observable` into a signal for the lifetime of the
/// calling component
pub fn use_observable<T>(observable: &Observable<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (value, set_value) = signal(observable.get());
    let subscription = observable.subscribe(move |latest: &T| {
        let _ = set_value.try_set(latest.clone());
    });
    on_cleanup(move || drop(subscription));
    value
}
