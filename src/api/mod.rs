//! API Bindings
//!
//! Typed wrappers over the request surface, organized by domain. Every call
//! goes through `ApiClient`, which consults the response cache before
//! dispatching to a `Backend` (the in-process mock in this app).

mod cache;
mod client;
mod mock;
mod contacts;

use std::fmt;

use serde_json::Value;

pub use cache::ResponseCache;
pub use client::{ApiClient, Backend};
pub use mock::MockApi;

pub use contacts::*;

// ========================
// Read-only Endpoints
// ========================

pub const SCHEMA_PATH: &str = "/schema";
pub const LAYOUTS_PATH: &str = "/layouts";
pub const CONVERSATIONS_PATH: &str = "/conversations";
pub const NOTES_PATH: &str = "/notes";
pub const TASKS_PATH: &str = "/tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path including any query string
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `error` field of an error body, if any
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
