//! Checklist domain model.
//!
//! # Responsibility
//! - Define the data contract loaders deserialize into and views read from.
//!
//! # Invariants
//! - Item order inside a document is meaningful and never reordered here.
//! - Id uniqueness is a caller concern; see `crate::validate`.

pub mod checklist;
