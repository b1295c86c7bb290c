//! Folder State
//!
//! Field filtering plus the open/closed and add-contact state of one
//! collapsible folder.

use crate::models::{Contact, FieldDef, FieldValue, FolderDef};

/// Keys seeded as empty strings in a new-contact draft
pub const DRAFT_TEXT_KEYS: &[&str] = &[
    "firstName",
    "lastName",
    "phone",
    "email",
    "address",
    "businessName",
    "streetAddress",
    "city",
    "country",
    "owner",
];

/// Keys seeded as empty lists in a new-contact draft
pub const DRAFT_LIST_KEYS: &[&str] = &["followers", "tags"];

/// Fields whose label or key contains `filter` (trimmed, case-insensitive).
///
/// A blank filter keeps every field. Order is preserved.
pub fn visible_fields<'a>(fields: &'a [FieldDef], filter: &str) -> Vec<&'a FieldDef> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return fields.iter().collect();
    }
    fields
        .iter()
        .filter(|f| f.label.to_lowercase().contains(&needle) || f.key.to_lowercase().contains(&needle))
        .collect()
}

/// Fields that should be drawn: not hidden, matching the filter
pub fn rendered_fields(fields: &[FieldDef], filter: &str) -> Vec<FieldDef> {
    visible_fields(fields, filter)
        .into_iter()
        .filter(|f| !f.hidden)
        .cloned()
        .collect()
}

/// Key that names a contact; its folder hosts the add-contact flow
pub const NAME_KEY: &str = "firstName";

/// Folder that offers "+ New contact": the one holding the name field,
/// else the first folder
pub fn add_folder_position(folders: &[FolderDef]) -> Option<usize> {
    folders
        .iter()
        .position(|folder| folder.fields.iter().any(|f| f.key == NAME_KEY))
        .or_else(|| (!folders.is_empty()).then_some(0))
}

/// Blank record used while composing a new contact
pub fn blank_draft() -> Contact {
    let mut draft = Contact::new();
    for key in DRAFT_TEXT_KEYS {
        draft.set(key, Some(FieldValue::text("")));
    }
    for key in DRAFT_LIST_KEYS {
        draft.set(key, Some(FieldValue::List(Vec::new())));
    }
    draft
}

/// A change that must be applied to the live contact
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPatch {
    pub key: String,
    pub value: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderState {
    open: bool,
    draft: Option<Contact>,
    saving: bool,
    error: Option<String>,
}

impl FolderState {
    pub fn new(default_open: bool) -> Self {
        Self { open: default_open, draft: None, saving: false, error: None }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_adding(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> Option<&Contact> {
        self.draft.as_ref()
    }

    /// Flip open/closed. Ignored while a new contact is being composed.
    pub fn toggle(&mut self) -> bool {
        if self.is_adding() {
            return false;
        }
        self.open = !self.open;
        true
    }

    pub fn begin_add(&mut self) {
        self.draft = Some(blank_draft());
        self.open = true;
        self.error = None;
    }

    pub fn cancel_add(&mut self) {
        self.draft = None;
        self.saving = false;
        self.error = None;
    }

    /// Route a field change: into the draft while adding, otherwise out to
    /// the caller as a patch for the live contact.
    pub fn on_field_value_change(&mut self, key: &str, value: Option<FieldValue>) -> Option<FieldPatch> {
        match &mut self.draft {
            Some(draft) => {
                draft.set(key, value);
                None
            }
            None => Some(FieldPatch { key: key.to_string(), value }),
        }
    }

    /// Copy of the draft to submit; marks the folder as saving
    pub fn start_save(&mut self) -> Option<Contact> {
        if self.saving {
            return None;
        }
        let draft = self.draft.clone()?;
        self.saving = true;
        self.error = None;
        Some(draft)
    }

    /// Leave add mode after the store accepted the draft
    pub fn save_succeeded(&mut self) {
        self.draft = None;
        self.saving = false;
        self.error = None;
    }

    /// Stay in add mode, keep the draft, remember why it failed
    pub fn save_failed(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;

    fn field(key: &str, label: &str) -> FieldDef {
        FieldDef {
            key: key.to_string(),
            label: label.to_string(),
            field_type: FieldType::String,
            options: None,
            hidden: false,
        }
    }

    fn keys(fields: &[&FieldDef]) -> Vec<String> {
        fields.iter().map(|f| f.key.clone()).collect()
    }

    fn sample() -> Vec<FieldDef> {
        vec![
            field("firstName", "First name"),
            field("lastName", "Last name"),
            field("email", "Email"),
            field("phone", "Mobile"),
        ]
    }

    #[test]
    fn test_blank_filter_keeps_all() {
        let fields = sample();
        assert_eq!(visible_fields(&fields, "").len(), 4);
        assert_eq!(keys(&visible_fields(&fields, "   ")), keys(&fields.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_filter_matches_label_or_key() {
        let fields = sample();
        // label match
        assert_eq!(keys(&visible_fields(&fields, "NAME")), vec!["firstName", "lastName"]);
        // key match only ("phone" is labelled "Mobile")
        assert_eq!(keys(&visible_fields(&fields, " phone ")), vec!["phone"]);
        assert!(visible_fields(&fields, "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let fields = sample();
        let visible = visible_fields(&fields, "e");
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| fields.iter().position(|f| f.key == v.key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rendered_fields_drop_hidden() {
        let mut fields = sample();
        fields[1].hidden = true;
        let rendered = rendered_fields(&fields, "");
        assert_eq!(rendered.len(), 3);
        assert!(rendered.iter().all(|f| f.key != "lastName"));
    }

    #[test]
    fn test_blank_draft_keys() {
        let draft = blank_draft();
        for key in DRAFT_TEXT_KEYS {
            assert_eq!(draft.get(key), Some(&FieldValue::text("")));
        }
        assert_eq!(draft.get("tags"), Some(&FieldValue::List(vec![])));
        assert_eq!(draft.len(), DRAFT_TEXT_KEYS.len() + DRAFT_LIST_KEYS.len());
    }

    #[test]
    fn test_toggle_blocked_while_adding() {
        let mut folder = FolderState::new(false);
        assert!(folder.toggle());
        assert!(folder.is_open());
        assert!(folder.toggle());
        assert!(!folder.is_open());

        folder.begin_add();
        assert!(folder.is_open(), "begin_add force-opens");
        assert!(!folder.toggle());
        assert!(folder.is_open());

        folder.cancel_add();
        assert!(!folder.is_adding());
        assert!(folder.toggle());
    }

    #[test]
    fn test_changes_route_to_draft_or_contact() {
        let mut folder = FolderState::new(true);
        let patch = folder.on_field_value_change("city", Some(FieldValue::text("Oslo")));
        assert_eq!(patch, Some(FieldPatch { key: "city".into(), value: Some(FieldValue::text("Oslo")) }));

        folder.begin_add();
        assert!(folder.on_field_value_change("firstName", Some(FieldValue::text("Ada"))).is_none());
        assert_eq!(folder.draft().unwrap().text("firstName"), "Ada");
    }

    #[test]
    fn test_save_cycle() {
        let mut folder = FolderState::new(true);
        assert!(folder.start_save().is_none(), "nothing to save outside add mode");

        folder.begin_add();
        folder.on_field_value_change("firstName", Some(FieldValue::text("Ada")));
        let draft = folder.start_save().unwrap();
        assert_eq!(draft.text("firstName"), "Ada");
        assert!(folder.start_save().is_none(), "no double submit");

        folder.save_failed("offline".into());
        assert!(folder.is_adding());
        assert_eq!(folder.error(), Some("offline"));
        assert_eq!(folder.draft().unwrap().text("firstName"), "Ada");

        folder.start_save().unwrap();
        folder.save_succeeded();
        assert!(!folder.is_adding());
        assert!(folder.error().is_none());
    }

    #[test]
    fn test_add_folder_follows_the_name_field() {
        let folders = vec![
            FolderDef { name: "Business".into(), icon: None, fields: vec![field("city", "City")] },
            FolderDef { name: "Contact".into(), icon: None, fields: sample() },
        ];
        assert_eq!(add_folder_position(&folders), Some(1));
        assert_eq!(add_folder_position(&folders[..1]), Some(0));
        assert_eq!(add_folder_position(&[]), None);
    }
}
