//! Response Cache
//!
//! Process-lifetime cache of successful GET responses, keyed by the exact
//! request path including its query string. Created at startup and owned
//! by the `ApiClient`; nothing evicts entries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ApiResponse;

#[derive(Clone, Default)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<String, ApiResponse>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, ApiResponse>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<ApiResponse> {
        self.entries().get(key).cloned()
    }

    /// Store a response. Non-2xx responses are ignored.
    pub fn insert(&self, key: &str, response: &ApiResponse) -> bool {
        if !response.is_success() {
            return false;
        }
        self.entries().insert(key.to_string(), response.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
