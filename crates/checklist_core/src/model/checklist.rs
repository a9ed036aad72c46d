//! Checklist document and item records.
//!
//! # Responsibility
//! - Hold the checklist rows exactly as supplied by the data source.
//! - Map Rust field names to the lowercase wire names used by host documents.
//!
//! # Invariants
//! - `ChecklistDocument::items` keeps source order.
//! - No flag here implies another; completion rules live outside core.

use serde::{Deserialize, Serialize};

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Expected to be non-empty and unique per document. Not enforced here.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Marks the item as mandatory for an externally defined completion rule.
    pub required: bool,
    /// Initial checked state supplied by the data source.
    #[serde(rename = "alreadychecked")]
    pub already_checked: bool,
    /// Live checked state, written by whichever controller owns the view.
    #[serde(rename = "currentstatus")]
    pub current_status: bool,
}

impl ChecklistItem {
    /// Creates an unchecked item.
    pub fn new(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required,
            already_checked: false,
            current_status: false,
        }
    }
}

/// Ordered checklist, serialized as `{"checklist": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDocument {
    #[serde(rename = "checklist")]
    pub items: Vec<ChecklistItem>,
}

impl ChecklistDocument {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChecklistItem> {
        self.items.iter()
    }

    /// Returns the first item with `id`.
    ///
    /// Documents may carry duplicate ids; later duplicates are shadowed.
    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable variant of [`ChecklistDocument::item`], used by controllers to
    /// update `current_status`.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl<'a> IntoIterator for &'a ChecklistDocument {
    type Item = &'a ChecklistItem;
    type IntoIter = std::slice::Iter<'a, ChecklistItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
