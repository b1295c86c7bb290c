//! Mock API
//!
//! In-process request interceptor serving the JSON fixtures under
//! `assets/data`. Stands in for a real backend.

use percent_encoding::percent_decode_str;
use serde_json::{json, Value};

use super::{ApiRequest, ApiResponse, Backend, Method};

const LAYOUTS_JSON: &str = include_str!("../../assets/data/layouts.json");
const SCHEMA_JSON: &str = include_str!("../../assets/data/schema.json");
const CONTACTS_JSON: &str = include_str!("../../assets/data/contacts.json");
const CONVERSATIONS_JSON: &str = include_str!("../../assets/data/conversations.json");
const NOTES_JSON: &str = include_str!("../../assets/data/notes.json");
const TASKS_JSON: &str = include_str!("../../assets/data/tasks.json");

/// Raw JSON documents served by the mock
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub layouts: &'static str,
    pub schema: &'static str,
    pub contacts: &'static str,
    pub conversations: &'static str,
    pub notes: &'static str,
    pub tasks: &'static str,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            layouts: LAYOUTS_JSON,
            schema: SCHEMA_JSON,
            contacts: CONTACTS_JSON,
            conversations: CONVERSATIONS_JSON,
            notes: NOTES_JSON,
            tasks: TASKS_JSON,
        }
    }
}

pub struct MockApi {
    fixtures: Fixtures,
}

impl MockApi {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    pub fn with_fixtures() -> Self {
        Self::new(Fixtures::default())
    }

    fn serve(&self, raw: &str) -> ApiResponse {
        match serde_json::from_str::<Value>(raw) {
            Ok(body) => ApiResponse::new(200, body),
            Err(e) => {
                log::error!("Broken fixture: {}", e);
                ApiResponse::new(500, json!({ "error": "Fixture could not be parsed" }))
            }
        }
    }
}

/// Decoded path without its query string
fn route_path(path: &str) -> String {
    let without_query = path.split('?').next().unwrap_or(path);
    percent_decode_str(without_query).decode_utf8_lossy().into_owned()
}

fn not_found() -> ApiResponse {
    ApiResponse::new(404, json!({ "error": "API endpoint not found" }))
}

impl Backend for MockApi {
    fn dispatch(&self, request: &ApiRequest) -> ApiResponse {
        let route = route_path(&request.path);
        match (request.method, route.as_str()) {
            (Method::Get, "/layouts") => self.serve(self.fixtures.layouts),
            (Method::Get, "/schema") => self.serve(self.fixtures.schema),
            (Method::Get, "/contacts") => self.serve(self.fixtures.contacts),
            (Method::Get, "/conversations") => self.serve(self.fixtures.conversations),
            (Method::Get, "/notes") => self.serve(self.fixtures.notes),
            (Method::Get, "/tasks") => self.serve(self.fixtures.tasks),
            // Created record is the body echoed back; no id is assigned
            (Method::Post, "/contacts") => {
                ApiResponse::new(201, request.body.clone().unwrap_or(Value::Null))
            }
            (method, _) => {
                log::warn!("No mock route for {} {}", method, request.path);
                not_found()
            }
        }
    }
}
