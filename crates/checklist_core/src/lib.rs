//! Checklist schema for game-engine hosts.
//! Parses, holds and writes back checklist documents; completion rules and
//! rendering belong to the host.

pub mod codec;
pub mod loader;
pub mod logging;
pub mod model;
pub mod validate;

pub use codec::{
    parse_document, parse_document_slice, serialize_document, serialize_document_pretty,
    MalformedSchemaError,
};
pub use loader::{load_document, save_document, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::checklist::{ChecklistDocument, ChecklistItem};
pub use validate::{validate_document, ValidationIssue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
