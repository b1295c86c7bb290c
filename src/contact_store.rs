//! Contact Store
//!
//! The one piece of mutable shared state. The list is replaced wholesale on
//! every change (copy-on-write), so a reader never sees a half-updated list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::{self, ApiClient};
use crate::error::ApiError;
use crate::models::{Contact, FieldValue};
use crate::observable::{LoadState, Observable};

pub type ContactList = LoadState<Arc<Vec<Contact>>>;

#[derive(Clone)]
pub struct ContactStore {
    client: ApiClient,
    list: Observable<ContactList>,
    requested: Arc<AtomicBool>,
}

impl ContactStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            list: Observable::new(LoadState::Loading),
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The live list; subscribers get the latest state right away
    pub fn current_list(&self) -> &Observable<ContactList> {
        &self.list
    }

    #[cfg(test)]
    pub fn subscribe(
        &self,
        listener: impl Fn(&ContactList) + Send + Sync + 'static,
    ) -> crate::observable::Subscription<ContactList> {
        self.list.subscribe(listener)
    }

    /// Initial fetch. Only the first call does any work.
    pub async fn load(&self) {
        if self.requested.swap(true, Ordering::SeqCst) {
            return;
        }
        match api::list_contacts(&self.client).await {
            Ok(contacts) => {
                log::info!("Loaded {} contacts", contacts.len());
                self.list.update(|state| {
                    // Keep anything added while the fetch was in flight
                    let mut merged = contacts;
                    if let LoadState::Ready(added) = state {
                        merged.extend(added.iter().cloned());
                    }
                    *state = LoadState::Ready(Arc::new(merged));
                });
            }
            Err(e) => {
                log::error!("Failed to load contacts: {}", e);
                self.list.set(LoadState::Failed(e.to_string()));
            }
        }
    }

    /// Create a contact and append the server's copy.
    ///
    /// Returns the new record's index. On failure the list is untouched.
    pub async fn add(&self, contact: Contact) -> Result<usize, ApiError> {
        let created = api::create_contact(&self.client, &contact).await?;
        let index = self.list.update(|state| {
            let mut next = match state {
                LoadState::Ready(list) => list.to_vec(),
                _ => Vec::new(),
            };
            next.push(created);
            let index = next.len() - 1;
            *state = LoadState::Ready(Arc::new(next));
            index
        });
        log::info!("Added contact at index {}", index);
        Ok(index)
    }

    /// Set one field of the contact at `index`; `None` clears it.
    ///
    /// Local only, nothing is sent to the API. Returns `false` when there
    /// is no contact at `index`.
    pub fn patch(&self, index: usize, key: &str, value: Option<FieldValue>) -> bool {
        let patched = self.list.update(|state| {
            let LoadState::Ready(list) = state else {
                return false;
            };
            if index >= list.len() {
                return false;
            }
            let mut next = list.to_vec();
            next[index].set(key, value);
            *state = LoadState::Ready(Arc::new(next));
            true
        });
        if !patched {
            log::warn!("No contact at index {} to patch '{}'", index, key);
        }
        patched
    }

    pub fn len(&self) -> usize {
        self.list.get().ready().map_or(0, |list| list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, ApiResponse, Backend, Method, MockApi};
    use futures::executor::block_on;
    use serde_json::json;

    /// Serves an empty contact list; echoes or rejects writes
    struct EmptyBackend {
        accept_writes: bool,
    }

    impl Backend for EmptyBackend {
        fn dispatch(&self, request: &ApiRequest) -> ApiResponse {
            match (request.method, self.accept_writes) {
                (Method::Get, _) => ApiResponse::new(200, json!([])),
                (_, true) => ApiResponse::new(201, request.body.clone().unwrap_or_default()),
                (_, false) => ApiResponse::new(503, json!({ "error": "read only" })),
            }
        }
    }

    fn empty_store(accept_writes: bool) -> ContactStore {
        let client = ApiClient::new(Arc::new(EmptyBackend { accept_writes }), 0);
        ContactStore::new(client)
    }

    fn fixture_store() -> ContactStore {
        ContactStore::new(ApiClient::new(Arc::new(MockApi::with_fixtures()), 0))
    }

    fn names(store: &ContactStore) -> Vec<String> {
        match store.current_list().get() {
            LoadState::Ready(list) => list.iter().map(|c| c.text("firstName").to_string()).collect(),
            _ => vec![],
        }
    }

    #[test]
    fn test_starts_loading() {
        let store = fixture_store();
        assert!(store.current_list().get().is_loading());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_load_fixture_contacts() {
        let store = fixture_store();
        block_on(store.load());
        assert_eq!(names(&store)[0], "Devon");
    }

    #[test]
    fn test_add_appends_and_notifies() {
        let store = fixture_store();
        block_on(store.load());
        let before = store.len();

        let notified = Arc::new(std::sync::Mutex::new(0));
        let counter = Arc::clone(&notified);
        let _sub = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        let index = block_on(store.add(Contact::new().with("firstName", FieldValue::text("Ada")))).unwrap();
        assert_eq!(index, before);
        assert_eq!(store.len(), before + 1);
        assert_eq!(names(&store).last().map(String::as_str), Some("Ada"));
        // Once on subscribe, once on add
        assert_eq!(*notified.lock().unwrap(), 2);
    }

    #[test]
    fn test_add_to_empty_store() {
        let store = empty_store(true);
        block_on(store.load());
        assert_eq!(store.len(), 0);

        let index = block_on(store.add(Contact::new().with("firstName", FieldValue::text("Ada")))).unwrap();
        assert_eq!(index, 0);
        assert_eq!(names(&store), vec!["Ada"]);
    }

    #[test]
    fn test_failed_add_leaves_list_untouched() {
        let store = empty_store(false);
        block_on(store.load());
        let before = store.current_list().get();

        let err = block_on(store.add(Contact::new())).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
        assert_eq!(store.current_list().get(), before);
    }

    #[test]
    fn test_patch_is_copy_on_write() {
        let store = fixture_store();
        block_on(store.load());
        let before = store.current_list().get();

        assert!(store.patch(0, "city", Some(FieldValue::text("Lisbon"))));
        let after = store.current_list().get();
        assert_eq!(after.ready().unwrap()[0].text("city"), "Lisbon");
        // The old snapshot is untouched
        assert_ne!(before.ready().unwrap()[0].text("city"), "Lisbon");
    }

    #[test]
    fn test_patch_out_of_range() {
        let store = fixture_store();
        assert!(!store.patch(0, "city", None));
        block_on(store.load());
        assert!(!store.patch(999, "city", None));
    }

    #[test]
    fn test_load_failure_is_explicit() {
        struct Down;
        impl Backend for Down {
            fn dispatch(&self, _request: &ApiRequest) -> ApiResponse {
                ApiResponse::new(500, json!({ "error": "backend down" }))
            }
        }
        let store = ContactStore::new(ApiClient::new(Arc::new(Down), 0));
        block_on(store.load());
        assert_eq!(
            store.current_list().get(),
            LoadState::Failed("request failed with status 500: backend down".into())
        );
    }

    #[test]
    fn test_cancel_after_navigation_restores_edited_contact() {
        use crate::form::{FieldEditor, FolderState};
        use crate::navigation::ContactCursor;

        let store = fixture_store();
        block_on(store.load());
        let city = |index: usize| match store.current_list().get() {
            LoadState::Ready(list) => list[index].text("city").to_string(),
            _ => String::new(),
        };
        let mut cursor = ContactCursor::default();
        let mut folder = FolderState::new(true);
        let mut editor = FieldEditor::default();

        // Field changes go through the folder to the contact being shown
        let apply = |folder: &mut FolderState, index: usize, value: Option<FieldValue>| {
            let patch = folder.on_field_value_change("city", value).unwrap();
            store.patch(index, &patch.key, patch.value);
        };

        editor.begin(Some(cursor.index()), Some(FieldValue::text(city(0))));
        apply(&mut folder, cursor.index(), Some(FieldValue::text("typed")));
        assert!(cursor.next(store.len()));

        // Cancel on the neighbour has nothing to restore
        assert_eq!(editor.cancel(Some(cursor.index())), None);
        assert_eq!(city(1), "London");

        assert!(cursor.prev());
        let restore = editor.cancel(Some(cursor.index())).unwrap();
        apply(&mut folder, cursor.index(), restore);
        assert_eq!(city(0), "Portland");
        assert_eq!(city(1), "London");
    }
}
