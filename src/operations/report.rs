//! Console reporting for info and export modes

use crate::git::FileList;
use std::io::{self, Write};
use std::path::Path;

/// Print each listed path on its own line, in list order
///
/// # Errors
///
/// Returns an error if:
/// - The output stream cannot be written
pub fn print_file_list<W: Write>(out: &mut W, files: &FileList) -> io::Result<()> {
    for path in files {
        writeln!(out, "{path}")?;
    }
    out.flush()
}

/// Print the single confirmation line for a finished export
///
/// # Errors
///
/// Returns an error if:
/// - The output stream cannot be written
pub fn print_export_complete<W: Write>(out: &mut W, output: &Path) -> io::Result<()> {
    writeln!(out, "Files successfully exported to {}.", output.display())?;
    out.flush()
}
