//! The form-shaped state the Document is collected from.
//!
//! `FormSnapshot` plays the role the input widgets played upstream: a flat
//! set of named scalar fields plus two ordered lists of repeatable items.
//! It is mutated by the Change Controller and read wholesale by
//! [`super::collect`] on every change.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SectionKind;

/// A single form value. Checkbox inputs coerce to boolean, everything else
/// to string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checkbox(bool),
    Text(String),
}

impl FieldValue {
    /// String coercion. Checkboxes have no text representation here.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Boolean coercion. Text fields never read as checked.
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Checkbox(b) => *b,
            FieldValue::Text(_) => false,
        }
    }
}

/// One repeatable form row (an experience or education item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Sequential display index assigned at creation ("Experience 2").
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub values: BTreeMap<String, FieldValue>,
}

impl DynamicItem {
    pub fn new(index: usize) -> Self {
        DynamicItem {
            id: Uuid::new_v4(),
            index,
            values: BTreeMap::new(),
        }
    }

    pub fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(|v| v.as_text().to_string())
            .unwrap_or_default()
    }

    pub fn flag(&self, field: &str) -> bool {
        self.values.get(field).map(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn set_text(&mut self, field: &str, value: &str) {
        self.values
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.values
            .insert(field.to_string(), FieldValue::Checkbox(value));
    }
}

/// The whole form surface. Deserializable so a saved snapshot can be fed to
/// the binary; every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub experience: Vec<DynamicItem>,
    #[serde(default)]
    pub education: Vec<DynamicItem>,
    /// Running counters for display indices; removal does not renumber,
    /// matching the upstream counter behavior.
    #[serde(default)]
    counters: BTreeMap<String, usize>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a named scalar field; missing fields read as empty.
    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn items(&self, kind: SectionKind) -> &[DynamicItem] {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
        }
    }

    fn items_mut(&mut self, kind: SectionKind) -> &mut Vec<DynamicItem> {
        match kind {
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
        }
    }

    /// Appends a fresh item with the next sequential display index and
    /// returns its id.
    pub fn add_item(&mut self, kind: SectionKind) -> Uuid {
        let counter = self
            .counters
            .entry(kind.section().as_str().to_string())
            .or_insert(0);
        *counter += 1;
        let index = *counter;
        let item = DynamicItem::new(index);
        let id = item.id;
        self.items_mut(kind).push(item);
        id
    }

    /// Removes an item by id. No-op when the id is unknown.
    pub fn remove_item(&mut self, kind: SectionKind, id: Uuid) -> bool {
        let items = self.items_mut(kind);
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn item_mut(&mut self, kind: SectionKind, id: Uuid) -> Option<&mut DynamicItem> {
        self.items_mut(kind).iter_mut().find(|item| item.id == id)
    }

    /// Reorders a container to match `order`. Ids absent from `order` keep
    /// their relative position at the end; unknown ids are ignored.
    pub fn apply_order(&mut self, kind: SectionKind, order: &[Uuid]) {
        let items = self.items_mut(kind);
        let mut reordered: Vec<DynamicItem> = Vec::with_capacity(items.len());
        for id in order {
            if let Some(index) = items.iter().position(|item| item.id == *id) {
                reordered.push(items.remove(index));
            }
        }
        reordered.append(items);
        *items = reordered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let form = FormSnapshot::new();
        assert_eq!(form.field("fullName"), "");
    }

    #[test]
    fn test_add_item_assigns_sequential_indices() {
        let mut form = FormSnapshot::new();
        form.add_item(SectionKind::Experience);
        form.add_item(SectionKind::Experience);
        let indices: Vec<usize> = form
            .items(SectionKind::Experience)
            .iter()
            .map(|i| i.index)
            .collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_counters_are_independent_per_section() {
        let mut form = FormSnapshot::new();
        form.add_item(SectionKind::Experience);
        form.add_item(SectionKind::Education);
        assert_eq!(form.items(SectionKind::Education)[0].index, 1);
    }

    #[test]
    fn test_remove_does_not_renumber() {
        let mut form = FormSnapshot::new();
        let first = form.add_item(SectionKind::Experience);
        form.add_item(SectionKind::Experience);
        form.remove_item(SectionKind::Experience, first);
        let next = form.add_item(SectionKind::Experience);
        let item = form
            .items(SectionKind::Experience)
            .iter()
            .find(|i| i.id == next)
            .unwrap();
        assert_eq!(item.index, 3, "counter keeps climbing after removal");
    }

    #[test]
    fn test_apply_order_reorders_items() {
        let mut form = FormSnapshot::new();
        let a = form.add_item(SectionKind::Education);
        let b = form.add_item(SectionKind::Education);
        let c = form.add_item(SectionKind::Education);
        form.apply_order(SectionKind::Education, &[b, a, c]);
        let ids: Vec<Uuid> = form
            .items(SectionKind::Education)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![b, a, c]);
    }

    #[test]
    fn test_apply_order_tolerates_partial_and_unknown_ids() {
        let mut form = FormSnapshot::new();
        let a = form.add_item(SectionKind::Education);
        let b = form.add_item(SectionKind::Education);
        form.apply_order(SectionKind::Education, &[b, Uuid::new_v4()]);
        let ids: Vec<Uuid> = form
            .items(SectionKind::Education)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_field_value_coercions() {
        assert_eq!(FieldValue::Checkbox(true).as_text(), "");
        assert!(FieldValue::Checkbox(true).as_flag());
        assert!(!FieldValue::Text("yes".into()).as_flag());
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let form: FormSnapshot = serde_json::from_str(
            r#"{"fields": {"fullName": "Ada"}, "experience": [{"values": {"jobTitle": "Engineer", "current": true}}]}"#,
        )
        .unwrap();
        assert_eq!(form.field("fullName"), "Ada");
        let item = &form.items(SectionKind::Experience)[0];
        assert_eq!(item.text("jobTitle"), "Engineer");
        assert!(item.flag("current"));
    }
}
