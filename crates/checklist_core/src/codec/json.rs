//! JSON encode/decode for checklist documents.
//!
//! # Responsibility
//! - Turn raw host documents into `ChecklistDocument` values, all or nothing.
//! - Write documents back in the same wire shape.
//!
//! # Invariants
//! - Every item must carry all five wire fields with the right JSON type.
//! - Unknown keys are ignored at every level.
//! - A key repeated inside one object keeps its last value.
//! - Duplicate ids are accepted; reporting them is `crate::validate`'s job.

use super::error::MalformedSchemaError;
use crate::model::checklist::{ChecklistDocument, ChecklistItem};
use log::debug;
use serde_json::{Map, Value};

pub type CodecResult<T> = Result<T, MalformedSchemaError>;

/// Wire key holding the item array.
pub const CHECKLIST_KEY: &str = "checklist";

/// Wire field names, in the order items are checked.
pub const ITEM_FIELDS: [&str; 5] = ["id", "label", "required", "alreadychecked", "currentstatus"];

/// Parses a checklist document from JSON text.
///
/// # Errors
/// - Returns `MalformedSchemaError` for bad syntax, a wrong top-level shape,
///   or any item with a missing or mistyped field. No partial document is
///   returned.
pub fn parse_document(raw: &str) -> CodecResult<ChecklistDocument> {
    let root: Value = serde_json::from_str(raw)?;
    document_from_value(root)
}

/// Byte-slice variant of [`parse_document`]. Invalid UTF-8 is a syntax error.
pub fn parse_document_slice(raw: &[u8]) -> CodecResult<ChecklistDocument> {
    let root: Value = serde_json::from_slice(raw)?;
    document_from_value(root)
}

/// Builds a document from an already-decoded JSON value.
pub fn document_from_value(root: Value) -> CodecResult<ChecklistDocument> {
    let mut root = match root {
        Value::Object(map) => map,
        other => {
            return Err(MalformedSchemaError::RootNotObject {
                found: json_kind(&other),
            })
        }
    };

    let raw_items = match root.remove(CHECKLIST_KEY) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(MalformedSchemaError::ChecklistNotArray {
                found: json_kind(&other),
            })
        }
        None => return Err(MalformedSchemaError::MissingChecklist),
    };

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, value) in raw_items.into_iter().enumerate() {
        items.push(item_from_value(index, value)?);
    }

    debug!(
        "event=checklist_parse module=codec status=ok items={}",
        items.len()
    );
    Ok(ChecklistDocument::new(items))
}

/// Serializes a document as compact JSON.
pub fn serialize_document(document: &ChecklistDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(document)
}

/// Serializes a document as indented JSON for human-edited files.
pub fn serialize_document_pretty(
    document: &ChecklistDocument,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

fn item_from_value(index: usize, value: Value) -> CodecResult<ChecklistItem> {
    let mut fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(MalformedSchemaError::ItemNotObject {
                index,
                found: json_kind(&other),
            })
        }
    };

    let [id, label, required, already_checked, current_status] = ITEM_FIELDS;
    Ok(ChecklistItem {
        id: take_string(&mut fields, index, id)?,
        label: take_string(&mut fields, index, label)?,
        required: take_bool(&fields, index, required)?,
        already_checked: take_bool(&fields, index, already_checked)?,
        current_status: take_bool(&fields, index, current_status)?,
    })
}

fn take_string(
    fields: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> CodecResult<String> {
    match fields.remove(field) {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(invalid_type(index, field, "a string", &other)),
        None => Err(MalformedSchemaError::MissingField { index, field }),
    }
}

fn take_bool(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> CodecResult<bool> {
    match fields.get(field) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(invalid_type(index, field, "a boolean", other)),
        None => Err(MalformedSchemaError::MissingField { index, field }),
    }
}

fn invalid_type(
    index: usize,
    field: &'static str,
    expected: &'static str,
    found: &Value,
) -> MalformedSchemaError {
    MalformedSchemaError::InvalidFieldType {
        index,
        field,
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
