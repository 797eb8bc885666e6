//! Zip archive serializer

use crate::error::ExportError;
use crate::git::FileList;
use crate::system::{FileInfo, System};
use anyhow::Result;
use chrono::{Datelike as _, Local, Timelike as _};
use std::io::{Cursor, Write as _};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Render a zip archive of every listed path that is a regular file
///
/// Paths are resolved against `root` and stored under their listed names,
/// uncompressed and in list order. Directories, dangling symlinks and missing
/// paths are skipped. An empty list yields a valid empty archive.
///
/// # Errors
///
/// Returns an error if:
/// - A listed regular file cannot be read
/// - The archive cannot be assembled
pub fn write_archive(system: &dyn System, root: &Path, files: &FileList) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entries = 0_usize;

    for path in files {
        let source = root.join(path);
        if !system.is_file(&source) {
            debug!("Skipping {path}: not a regular file");
            continue;
        }

        let contents = system.read(&source).map_err(|e| {
            return ExportError::filesystem(format!(
                "Failed to read '{}': {e}",
                source.display()
            ));
        })?;
        let info = system.file_info(&source).unwrap_or_default();
        let options = entry_options(info, contents.len());

        zip.start_file(path.as_str(), options)
            .map_err(ExportError::from)?;
        zip.write_all(&contents).map_err(|e| {
            return ExportError::serialization(format!("zip: failed to write entry '{path}': {e}"));
        })?;
        entries += 1;
    }

    let buffer = zip.finish().map_err(ExportError::from)?;
    debug!("Archived {entries} of {} listed paths", files.len());

    Ok(buffer.into_inner())
}

/// Entry options: stored, stamped with the file's mtime and mode
fn entry_options(info: FileInfo, size: usize) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(entry_time(info.modified))
        .large_file(u32::try_from(size).is_err());

    if let Some(mode) = info.unix_mode {
        options = options.unix_permissions(mode);
    }

    options
}

/// Convert a modification time to a zip timestamp in local time
///
/// Times outside the DOS range (before 1980 or after 2107) fall back to the
/// DOS epoch.
fn entry_time(modified: Option<SystemTime>) -> DateTime {
    modified
        .and_then(|time| {
            let local = chrono::DateTime::<Local>::from(time);
            DateTime::from_date_and_time(
                u16::try_from(local.year()).ok()?,
                u8::try_from(local.month()).ok()?,
                u8::try_from(local.day()).ok()?,
                u8::try_from(local.hour()).ok()?,
                u8::try_from(local.minute()).ok()?,
                u8::try_from(local.second()).ok()?,
            )
            .ok()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_entry_time_without_mtime_is_dos_epoch() {
        assert_eq!(entry_time(None), DateTime::default());
    }

    #[test]
    fn test_entry_time_before_1980_is_dos_epoch() {
        let seventies = UNIX_EPOCH + Duration::from_secs(86_400 * 365);
        assert_eq!(entry_time(Some(seventies)), DateTime::default());
    }

    #[test]
    fn test_entry_time_keeps_calendar_date() {
        // 2021-06-15 12:00:00 UTC is the same calendar year in every timezone
        let time = UNIX_EPOCH + Duration::from_secs(1_623_758_400);
        let stamp = entry_time(Some(time));
        assert_eq!(stamp.year(), 2021);
        assert_eq!(stamp.month(), 6);
    }
}
