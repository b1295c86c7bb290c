//! Layout Utilities
//!
//! Resolving named layouts and ordering schema folders for them.

use std::collections::HashSet;

use crate::models::{FolderDef, LayoutMap, PageLayout, SectionKey};

pub const DEFAULT_LAYOUT: &str = "default";

/// Look up a layout by name. Unknown names resolve to `None`.
pub fn resolve<'a>(layouts: &'a LayoutMap, key: &str) -> Option<&'a PageLayout> {
    layouts.get(key)
}

/// Layout names for the switcher: "default" first, the rest sorted
pub fn layout_keys(layouts: &LayoutMap) -> Vec<String> {
    let mut keys: Vec<String> = layouts.keys().cloned().collect();
    keys.sort_by(|a, b| (a != DEFAULT_LAYOUT, a).cmp(&(b != DEFAULT_LAYOUT, b)));
    keys
}

/// Reorder folders by the layout's `folderOrder`.
///
/// Named folders come first in declared order (unknown names and repeats
/// are skipped), then every remaining folder in its original order.
/// No layout or an empty order leaves the folders as they are.
pub fn folder_order_for(layout: Option<&PageLayout>, folders: &[FolderDef]) -> Vec<FolderDef> {
    let order = match layout.and_then(|l| l.folder_order.as_ref()) {
        Some(order) if !order.is_empty() => order,
        _ => return folders.to_vec(),
    };

    let mut placed: HashSet<&str> = HashSet::new();
    let mut result = Vec::with_capacity(folders.len());
    for name in order {
        match folders.iter().find(|f| &f.name == name) {
            Some(folder) if placed.insert(folder.name.as_str()) => result.push(folder.clone()),
            Some(_) => {}
            None => log::debug!("folderOrder names unknown folder '{}'", name),
        }
    }
    result.extend(folders.iter().filter(|f| !placed.contains(f.name.as_str())).cloned());
    result
}

impl PageLayout {
    /// Section keys placed more than once across all columns
    pub fn duplicate_sections(&self) -> Vec<SectionKey> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for section in self.columns.iter().flat_map(|c| &c.sections) {
            if !seen.insert(section.key) && !duplicates.contains(&section.key) {
                duplicates.push(section.key);
            }
        }
        duplicates
    }

    /// Copy of the layout keeping only the first placement of each section
    pub fn deduplicated(&self) -> PageLayout {
        let mut seen = HashSet::new();
        let mut layout = self.clone();
        for column in &mut layout.columns {
            column.sections.retain(|s| seen.insert(s.key));
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ColumnKey, Section};

    fn folder(name: &str) -> FolderDef {
        FolderDef { name: name.to_string(), icon: None, fields: vec![] }
    }

    fn names(folders: &[FolderDef]) -> Vec<&str> {
        folders.iter().map(|f| f.name.as_str()).collect()
    }

    fn layout_with_order(order: Option<Vec<&str>>) -> PageLayout {
        PageLayout {
            columns: vec![],
            folder_order: order.map(|o| o.into_iter().map(String::from).collect()),
        }
    }

    fn column(key: ColumnKey, sections: &[SectionKey]) -> Column {
        Column { key, sections: sections.iter().map(|&key| Section { key }).collect() }
    }

    #[test]
    fn test_folder_order_named_first_then_rest() {
        let folders = vec![folder("Contact"), folder("Business"), folder("Social"), folder("Extra")];
        let layout = layout_with_order(Some(vec!["Social", "Contact"]));
        let ordered = folder_order_for(Some(&layout), &folders);
        assert_eq!(names(&ordered), vec!["Social", "Contact", "Business", "Extra"]);
    }

    #[test]
    fn test_folder_order_skips_unknown_and_repeats() {
        let folders = vec![folder("A"), folder("B"), folder("C")];
        let layout = layout_with_order(Some(vec!["Nope", "C", "C", "A"]));
        let ordered = folder_order_for(Some(&layout), &folders);
        assert_eq!(names(&ordered), vec!["C", "A", "B"]);
        assert_eq!(ordered.len(), folders.len());
    }

    #[test]
    fn test_folder_order_absent_or_empty_is_identity() {
        let folders = vec![folder("B"), folder("A")];
        assert_eq!(folder_order_for(None, &folders), folders);
        assert_eq!(folder_order_for(Some(&layout_with_order(None)), &folders), folders);
        assert_eq!(folder_order_for(Some(&layout_with_order(Some(vec![]))), &folders), folders);
    }

    #[test]
    fn test_folder_order_is_permutation_for_every_fixture_layout() {
        use crate::api::{ApiRequest, Backend, MockApi};

        let api = MockApi::with_fixtures();
        let layouts: LayoutMap =
            serde_json::from_value(api.dispatch(&ApiRequest::get("/layouts")).body).unwrap();
        let schema: crate::models::Schema =
            serde_json::from_value(api.dispatch(&ApiRequest::get("/schema")).body).unwrap();

        for key in layout_keys(&layouts) {
            let ordered = folder_order_for(resolve(&layouts, &key), &schema.folders);
            let mut before = names(&schema.folders);
            let mut after = names(&ordered);
            before.sort();
            after.sort();
            assert_eq!(before, after, "layout {}", key);
        }
    }

    #[test]
    fn test_layout_keys_default_first() {
        let mut layouts = LayoutMap::new();
        for key in ["zen", "activity", "default"] {
            layouts.insert(key.to_string(), layout_with_order(None));
        }
        assert_eq!(layout_keys(&layouts), vec!["default", "activity", "zen"]);
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let mut layouts = LayoutMap::new();
        layouts.insert("default".into(), layout_with_order(None));
        assert!(resolve(&layouts, "default").is_some());
        assert!(resolve(&layouts, "missing").is_none());
    }

    #[test]
    fn test_duplicate_sections_detected_and_removed() {
        let layout = PageLayout {
            columns: vec![
                column(ColumnKey::Left, &[SectionKey::ContactDetails, SectionKey::Notes]),
                column(ColumnKey::Right, &[SectionKey::Notes, SectionKey::Tasks]),
            ],
            folder_order: None,
        };
        assert_eq!(layout.duplicate_sections(), vec![SectionKey::Notes]);

        let clean = layout.deduplicated();
        assert!(clean.duplicate_sections().is_empty());
        assert_eq!(clean.columns[1].sections, vec![Section { key: SectionKey::Tasks }]);
    }
}
