//! Frontend Models
//!
//! Data structures matching the mock API payloads.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ========================
// Schema
// ========================

/// Input/display kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    String,
    StringMultiline,
    Phone,
    Email,
    Radio,
    MultiSelect,
}

/// One labeled, typed unit of contact data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Choice list for radio / multi-select
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub hidden: bool,
}

impl FieldDef {
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderIcon {
    User,
    Info,
}

/// A named, ordered group of fields rendered as one collapsible section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<FolderIcon>,
    pub fields: Vec<FieldDef>,
}

/// `GET /schema` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub folders: Vec<FolderDef>,
}

// ========================
// Contacts
// ========================

/// A single contact field value.
///
/// Strings and string lists are the shapes the schema produces; anything
/// else the API hands back (null, numbers, booleans) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Other(serde_json::Value::Null) => Ok(()),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A contact record: field key -> value.
///
/// There is no id; a contact is identified by its position in the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contact {
    fields: BTreeMap<String, FieldValue>,
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, key: &str, value: FieldValue) -> Self {
        self.set(key, Some(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Text value of a field, or "" when absent / not text
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Set a field; `None` removes it
    pub fn set(&mut self, key: &str, value: Option<FieldValue>) {
        match value {
            Some(v) => {
                self.fields.insert(key.to_string(), v);
            }
            None => {
                self.fields.remove(key);
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ========================
// Layouts
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    Left,
    Middle,
    Right,
}

impl ColumnKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Left => "left",
            ColumnKey::Middle => "middle",
            ColumnKey::Right => "right",
        }
    }
}

/// One of the four panel types a layout can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    ContactDetails,
    Conversations,
    Notes,
    Tasks,
}

impl SectionKey {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::ContactDetails => "Contact",
            SectionKey::Conversations => "Conversations",
            SectionKey::Notes => "Notes",
            SectionKey::Tasks => "Tasks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: SectionKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: ColumnKey,
    pub sections: Vec<Section>,
}

/// A named arrangement of sections into columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub columns: Vec<Column>,
    /// Preferred folder order by folder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_order: Option<Vec<String>>,
}

/// `GET /layouts` payload
pub type LayoutMap = HashMap<String, PageLayout>;

// ========================
// Activities
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u32,
    pub contact_name: String,
    pub channel: String,
    pub subject: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub unread: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Markdown body
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
