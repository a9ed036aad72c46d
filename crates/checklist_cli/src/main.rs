//! `checklist` command-line host.
//!
//! # Responsibility
//! - Load checklist files through `checklist_core` and report problems.
//! - Re-emit documents in canonical pretty form.

use anyhow::{bail, Context, Result};
use checklist_core::{
    default_log_level, init_logging, load_document, save_document, serialize_document_pretty,
    validate_document, ChecklistDocument, ValidationIssue,
};
use clap::{Parser, Subcommand};
use log::warn;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Load, check and format checklist documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Absolute directory for rotating log files (logging is off when unset)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error (needs --log-dir)
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a checklist file and report empty or duplicate ids
    Check {
        /// Path to the checklist JSON file
        path: PathBuf,
    },

    /// Print a checklist file in canonical form
    Fmt {
        /// Path to the checklist JSON file
        path: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool,
    },
}

/// Outcome of `checklist check` for one file.
struct CheckReport {
    items: usize,
    required: usize,
    issues: Vec<ValidationIssue>,
}

impl CheckReport {
    fn from_document(document: &ChecklistDocument) -> Self {
        Self {
            items: document.len(),
            required: document.iter().filter(|item| item.required).count(),
            issues: validate_document(document),
        }
    }

    /// Summary line followed by one indented line per issue.
    fn render(&self) -> String {
        let mut out = format!(
            "items={} required={} issues={}\n",
            self.items,
            self.required,
            self.issues.len()
        );
        for issue in &self.issues {
            let _ = writeln!(out, "  {issue}");
        }
        out
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    match cli.command {
        Commands::Check { path } => {
            let report = CheckReport::from_document(&load_document(&path)?);
            print!("{}", report.render());
            ensure_clean(&path, &report)
        }
        Commands::Fmt { path, write } => {
            if let Some(text) = fmt(&path, write)? {
                print!("{text}");
            }
            Ok(())
        }
    }
}

fn ensure_clean(path: &Path, report: &CheckReport) -> Result<()> {
    if report.issues.is_empty() {
        return Ok(());
    }
    warn!(
        "event=checklist_check module=cli status=issues issues={} path={}",
        report.issues.len(),
        path.display()
    );
    bail!("{} has {} issue(s)", path.display(), report.issues.len())
}

/// Returns the canonical text to print, or `None` after rewriting `path`.
///
/// Printed text matches the bytes `--write` leaves on disk.
fn fmt(path: &Path, write: bool) -> Result<Option<String>> {
    let document = load_document(path)?;
    if write {
        save_document(path, &document)?;
        return Ok(None);
    }

    let mut body = serialize_document_pretty(&document)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    body.push('\n');
    Ok(Some(body))
}
