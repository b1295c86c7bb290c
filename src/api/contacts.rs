//! Contact Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Contact;

pub const CONTACTS_PATH: &str = "/contacts";

pub async fn list_contacts(client: &ApiClient) -> Result<Vec<Contact>, ApiError> {
    client.get(CONTACTS_PATH).await
}

/// Create a contact; returns the server's copy of the record
pub async fn create_contact(client: &ApiClient, contact: &Contact) -> Result<Contact, ApiError> {
    client.post(CONTACTS_PATH, contact).await
}
