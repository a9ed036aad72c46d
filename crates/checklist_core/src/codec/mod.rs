//! Checklist wire codec.
//!
//! Parsing is strict about the five item fields and lenient about anything
//! else a host document carries.

pub mod error;
pub mod json;

pub use error::MalformedSchemaError;
pub use json::{
    document_from_value, parse_document, parse_document_slice, serialize_document,
    serialize_document_pretty, CodecResult, CHECKLIST_KEY,
};
