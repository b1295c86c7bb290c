//! Field State
//!
//! Emptiness checks, multi-select toggling and the edit/commit/cancel
//! cycle of a single field. Nothing here writes a value anywhere; callers
//! emit the returned values as change events.

use crate::models::FieldValue;

/// True for absent, null, "" and empty lists. `0` and `false` are values.
pub fn is_empty(value: Option<&FieldValue>) -> bool {
    match value {
        None => true,
        Some(FieldValue::Text(s)) => s.is_empty(),
        Some(FieldValue::List(items)) => items.is_empty(),
        Some(FieldValue::Other(v)) => v.is_null(),
    }
}

/// Add `option` (when `included` and missing) or remove every occurrence.
///
/// Non-list values count as an empty list.
pub fn toggle_multi_select_option(current: Option<&FieldValue>, option: &str, included: bool) -> Vec<String> {
    let mut items: Vec<String> = current.and_then(FieldValue::as_list).map(<[String]>::to_vec).unwrap_or_default();
    if included {
        if !items.iter().any(|item| item == option) {
            items.push(option.to_string());
        }
    } else {
        items.retain(|item| item != option);
    }
    items
}

/// Edit mode of one field, with the value to restore on cancel.
///
/// A session belongs to the record it was opened on. Browsing to another
/// record hides it; cancelling there restores nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEditor {
    session: Option<EditSession>,
}

#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    record: Option<usize>,
    snapshot: Option<FieldValue>,
}

impl FieldEditor {
    /// Whether an edit is open on `record`
    pub fn is_editing(&self, record: Option<usize>) -> bool {
        self.session.as_ref().is_some_and(|s| s.record == record)
    }

    /// Remember `current` of `record` and enter edit mode
    pub fn begin(&mut self, record: Option<usize>, current: Option<FieldValue>) {
        self.session = Some(EditSession { record, snapshot: current });
    }

    /// Leave edit mode keeping whatever was typed
    pub fn commit(&mut self) {
        self.session = None;
    }

    /// Leave edit mode on `record`. Returns the value to restore when the
    /// open edit belongs to that record.
    pub fn cancel(&mut self, record: Option<usize>) -> Option<Option<FieldValue>> {
        if !self.is_editing(record) {
            return None;
        }
        self.session.take().map(|s| s.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&FieldValue::Other(serde_json::Value::Null))));
        assert!(is_empty(Some(&FieldValue::text(""))));
        assert!(is_empty(Some(&list(&[]))));

        assert!(!is_empty(Some(&FieldValue::text(" "))));
        assert!(!is_empty(Some(&list(&["a"]))));
        assert!(!is_empty(Some(&FieldValue::Other(json!(0)))));
        assert!(!is_empty(Some(&FieldValue::Other(json!(false)))));
    }

    #[test]
    fn test_toggle_adds_once() {
        let current = list(&["VIP"]);
        assert_eq!(toggle_multi_select_option(Some(&current), "Lead", true), vec!["VIP", "Lead"]);
        assert_eq!(toggle_multi_select_option(Some(&current), "VIP", true), vec!["VIP"]);
    }

    #[test]
    fn test_toggle_removes_all_occurrences() {
        let current = list(&["a", "b", "a", "c"]);
        assert_eq!(toggle_multi_select_option(Some(&current), "a", false), vec!["b", "c"]);
    }

    #[test]
    fn test_toggle_coerces_non_lists() {
        assert_eq!(toggle_multi_select_option(None, "x", true), vec!["x"]);
        assert_eq!(toggle_multi_select_option(Some(&FieldValue::text("x")), "y", true), vec!["y"]);
        assert!(toggle_multi_select_option(Some(&FieldValue::text("x")), "x", false).is_empty());
    }

    #[test]
    fn test_toggle_round_trip_preserves_order() {
        let original = list(&["c", "a", "b"]);
        let added = FieldValue::List(toggle_multi_select_option(Some(&original), "z", true));
        let back = toggle_multi_select_option(Some(&added), "z", false);
        assert_eq!(FieldValue::List(back), original);
    }

    #[test]
    fn test_editor_cancel_restores_snapshot() {
        let mut editor = FieldEditor::default();
        editor.begin(Some(0), Some(FieldValue::text("before")));
        assert!(editor.is_editing(Some(0)));

        assert_eq!(editor.cancel(Some(0)), Some(Some(FieldValue::text("before"))));
        assert!(!editor.is_editing(Some(0)));
        // Snapshot is gone
        assert_eq!(editor.cancel(Some(0)), None);
    }

    #[test]
    fn test_editor_cancel_restores_absent_value() {
        let mut editor = FieldEditor::default();
        editor.begin(Some(3), None);
        assert_eq!(editor.cancel(Some(3)), Some(None));
    }

    #[test]
    fn test_editor_commit_drops_snapshot() {
        let mut editor = FieldEditor::default();
        editor.begin(Some(0), Some(FieldValue::text("x")));
        editor.commit();
        assert!(!editor.is_editing(Some(0)));
        assert_eq!(editor, FieldEditor::default());
    }

    #[test]
    fn test_editor_session_stays_with_its_record() {
        let mut editor = FieldEditor::default();
        editor.begin(Some(0), Some(FieldValue::text("Portland")));

        // Browsed to the next record mid-edit
        assert!(!editor.is_editing(Some(1)));
        assert_eq!(editor.cancel(Some(1)), None);

        // Back on the edited record the session is still open
        assert!(editor.is_editing(Some(0)));
        assert_eq!(editor.cancel(Some(0)), Some(Some(FieldValue::text("Portland"))));
    }
}
