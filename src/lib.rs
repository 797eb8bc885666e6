//! `repo-export` - Export the files of a Git repository
//!
//! This library lists the files git tracks (optionally with untracked files
//! that are not ignored) and either prints them, packs them into a zip
//! archive, or embeds their text in an XML document.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod operations;
pub mod system;

use anyhow::{Context as _, Result};
use config::{ExportTarget, Mode};
use error::ExportError;
use git::list_files;
use operations::{ExportOperation, print_export_complete, print_file_list};
use std::io::{self, Write};
use system::System;

/// Main entry point for the repo-export library
///
/// # Errors
///
/// Returns an error if:
/// - Neither info mode nor a format was requested (`ExportError::Usage`)
/// - Git fails, or the export cannot be written
pub fn run(target: &ExportTarget, system: &dyn System) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(target, system, &mut out)
}

/// Run one invocation, printing the report to `out`
///
/// # Errors
///
/// Returns an error if:
/// - Neither info mode nor a format was requested (`ExportError::Usage`)
/// - Git fails, or the export cannot be written
pub fn run_with_output<W: Write>(
    target: &ExportTarget,
    system: &dyn System,
    out: &mut W,
) -> Result<()> {
    match target.mode() {
        Mode::Usage => Err(ExportError::Usage.into()),
        Mode::Info => {
            let files = list_files(&target.repo_path, target.include_untracked)?;
            print_file_list(out, &files).context("Failed to print file list")?;
            Ok(())
        }
        Mode::Export(_) => {
            let operation = ExportOperation::new(target.clone(), system)?;
            let summary = operation.execute()?;
            print_export_complete(out, &summary.output).context("Failed to print report")?;
            Ok(())
        }
    }
}
