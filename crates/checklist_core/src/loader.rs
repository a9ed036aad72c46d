//! File-backed checklist loading.
//!
//! # Responsibility
//! - Read a checklist document from disk and hand back a parsed value.
//! - Write a document back in the human-editable pretty form.
//!
//! # Invariants
//! - Logs carry metadata only (path, counts, timings), never labels.
//! - A failed load never yields a partial document.

use crate::codec::{parse_document_slice, serialize_document_pretty, MalformedSchemaError};
use crate::model::checklist::ChecklistDocument;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors from reading or writing a checklist file.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Malformed {
        path: PathBuf,
        source: MalformedSchemaError,
    },
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Malformed { path, .. } | Self::Encode { path, .. } => {
                path
            }
        }
    }

    /// Returns the schema error when the file was readable but malformed.
    pub fn as_malformed(&self) -> Option<&MalformedSchemaError> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "checklist_io_failed",
            Self::Malformed { .. } => "checklist_malformed",
            Self::Encode { .. } => "checklist_encode_failed",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Malformed { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Encode { path, source } => {
                write!(f, "{}: failed to encode checklist: {source}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Reads and parses the checklist file at `path`.
///
/// # Side effects
/// - Emits `checklist_load` events with status and duration.
pub fn load_document(path: impl AsRef<Path>) -> LoadResult<ChecklistDocument> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = std::fs::read(path)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|bytes| {
            parse_document_slice(&bytes).map_err(|source| LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })
        });

    match &result {
        Ok(document) => info!(
            "event=checklist_load module=loader status=ok items={} duration_ms={} path={}",
            document.len(),
            started_at.elapsed().as_millis(),
            path.display()
        ),
        Err(err) => error!(
            "event=checklist_load module=loader status=error duration_ms={} error_code={} path={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            path.display(),
            err
        ),
    }
    result
}

/// Writes `document` to `path` as pretty JSON with a trailing newline.
///
/// Existing files are overwritten. Parent directories are not created.
pub fn save_document(path: impl AsRef<Path>, document: &ChecklistDocument) -> LoadResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = serialize_document_pretty(document)
        .map_err(|source| LoadError::Encode {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|mut body| {
            body.push('\n');
            std::fs::write(path, body).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        });

    match &result {
        Ok(()) => info!(
            "event=checklist_save module=loader status=ok items={} duration_ms={} path={}",
            document.len(),
            started_at.elapsed().as_millis(),
            path.display()
        ),
        Err(err) => error!(
            "event=checklist_save module=loader status=error duration_ms={} error_code={} path={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            path.display(),
            err
        ),
    }
    result
}
