//! Opt-in document checks.
//!
//! Parsing accepts empty and duplicate ids as-is. Hosts that care call
//! [`validate_document`] after loading and decide what to do with the issues.

use crate::model::checklist::ChecklistDocument;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// One finding against a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyId {
        index: usize,
    },
    DuplicateId {
        id: String,
        first_index: usize,
        index: usize,
    },
}

impl ValidationIssue {
    pub fn index(&self) -> usize {
        match self {
            Self::EmptyId { index } | Self::DuplicateId { index, .. } => *index,
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "item {index} has an empty id"),
            Self::DuplicateId {
                id,
                first_index,
                index,
            } => write!(
                f,
                "item {index} reuses id `{id}` first seen at item {first_index}"
            ),
        }
    }
}

/// Reports empty ids and every repeated id, in document order.
///
/// Whitespace-only ids count as empty and are not tracked for duplicates.
pub fn validate_document(document: &ChecklistDocument) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut first_seen = HashMap::<&str, usize>::new();

    for (index, item) in document.iter().enumerate() {
        if item.id.trim().is_empty() {
            issues.push(ValidationIssue::EmptyId { index });
            continue;
        }
        match first_seen.get(item.id.as_str()) {
            Some(&first_index) => issues.push(ValidationIssue::DuplicateId {
                id: item.id.clone(),
                first_index,
                index,
            }),
            None => {
                first_seen.insert(item.id.as_str(), index);
            }
        }
    }
    issues
}
