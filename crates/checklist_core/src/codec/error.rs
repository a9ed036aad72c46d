//! Parse failure taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when raw input does not match the checklist document shape.
///
/// Item-level variants carry the zero-based item index and the wire field
/// name so callers can point at the offending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedSchemaError {
    /// Input is not well-formed JSON. `message` carries no position text.
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    RootNotObject {
        found: &'static str,
    },
    MissingChecklist,
    ChecklistNotArray {
        found: &'static str,
    },
    ItemNotObject {
        index: usize,
        found: &'static str,
    },
    MissingField {
        index: usize,
        field: &'static str,
    },
    InvalidFieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl MalformedSchemaError {
    /// Index of the offending item, when the failure is item-scoped.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::ItemNotObject { index, .. }
            | Self::MissingField { index, .. }
            | Self::InvalidFieldType { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Wire name of the offending field, when one is known.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidFieldType { field, .. } => {
                Some(*field)
            }
            Self::MissingChecklist | Self::ChecklistNotArray { .. } => Some("checklist"),
            _ => None,
        }
    }
}

impl Display for MalformedSchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax {
                line,
                column,
                message,
            } => write!(
                f,
                "checklist is not valid JSON at line {line} column {column}: {message}"
            ),
            Self::RootNotObject { found } => {
                write!(f, "checklist root must be an object, found {found}")
            }
            Self::MissingChecklist => write!(f, "checklist root is missing field `checklist`"),
            Self::ChecklistNotArray { found } => {
                write!(f, "field `checklist` must be an array, found {found}")
            }
            Self::ItemNotObject { index, found } => {
                write!(f, "checklist item {index} must be an object, found {found}")
            }
            Self::MissingField { index, field } => {
                write!(f, "checklist item {index} is missing field `{field}`")
            }
            Self::InvalidFieldType {
                index,
                field,
                expected,
                found,
            } => write!(
                f,
                "checklist item {index} field `{field}` must be {expected}, found {found}"
            ),
        }
    }
}

impl Error for MalformedSchemaError {}

impl From<serde_json::Error> for MalformedSchemaError {
    fn from(value: serde_json::Error) -> Self {
        let (line, column) = (value.line(), value.column());
        let full = value.to_string();
        let position = format!(" at line {line} column {column}");
        let message = full.strip_suffix(&position).unwrap_or(&full).to_string();
        Self::Syntax {
            line,
            column,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MalformedSchemaError;

    #[test]
    fn syntax_display_names_position_once() {
        let raw = "{\n  \"checklist\": [\n";
        let err: MalformedSchemaError = serde_json::from_str::<serde_json::Value>(raw)
            .unwrap_err()
            .into();
        let text = err.to_string();
        assert_eq!(text.matches(" line ").count(), 1, "unexpected display: {text}");
        match err {
            MalformedSchemaError::Syntax { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(!message.contains("line"), "unexpected message: {message}");
                assert!(message.contains("EOF"));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
