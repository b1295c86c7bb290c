//! API Client
//!
//! Cache in front, backend behind, with simulated network latency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiRequest, ApiResponse, Method, ResponseCache};
use crate::error::ApiError;

/// Something that answers requests
pub trait Backend: Send + Sync {
    fn dispatch(&self, request: &ApiRequest) -> ApiResponse;
}

#[derive(Clone)]
pub struct ApiClient {
    backend: Arc<dyn Backend>,
    cache: ResponseCache,
    latency_ms: u32,
    dispatches: Arc<AtomicUsize>,
}

impl ApiClient {
    pub fn new(backend: Arc<dyn Backend>, latency_ms: u32) -> Self {
        Self {
            backend,
            cache: ResponseCache::new(),
            latency_ms,
            dispatches: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Number of requests that reached the backend
    #[cfg(test)]
    pub fn dispatch_count(&self) -> usize {
        self.dispatches.load(Ordering::Relaxed)
    }

    /// Send a request. GETs are answered from cache when possible.
    pub async fn send(&self, request: ApiRequest) -> ApiResponse {
        let cacheable = request.method == Method::Get;
        if cacheable {
            if let Some(hit) = self.cache.get(&request.path) {
                log::debug!("cache hit {}", request.path);
                return hit;
            }
        }

        self.simulate_latency().await;
        self.dispatches.fetch_add(1, Ordering::Relaxed);
        log::debug!("{} {}", request.method, request.path);
        let response = self.backend.dispatch(&request);

        if cacheable && self.cache.insert(&request.path, &response) {
            log::debug!("cached {} ({} entries)", request.path, self.cache.len());
        }
        response
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::get(path)).await;
        decode(Method::Get, path, response)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        let response = self.send(ApiRequest::post(path, body)).await;
        decode(Method::Post, path, response)
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

fn decode<T: DeserializeOwned>(method: Method, path: &str, response: ApiResponse) -> Result<T, ApiError> {
    if response.status == 404 {
        return Err(ApiError::NotFound { method, path: path.to_string() });
    }
    if !response.is_success() {
        let message = response.error_message().unwrap_or("unknown error").to_string();
        return Err(ApiError::Status { status: response.status, message });
    }
    serde_json::from_value(response.body).map_err(ApiError::Decode)
}
