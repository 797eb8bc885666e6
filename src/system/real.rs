//! Real system implementation using `std::env` and `std::fs`

use super::{FileInfo, System};
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Production implementation of System trait
///
/// This implementation directly delegates to the standard library's
/// environment and filesystem functions.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Writes through a temporary file in the destination directory so a
    /// failed write never leaves a truncated file behind.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };

        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(contents)?;
        temp.flush()?;

        // Temporary files are private; keep the destination's mode instead
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt as _;
            let mode = fs::metadata(path).map_or(0o644, |m| m.permissions().mode());
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(mode))?;
        }

        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn file_info(&self, path: &Path) -> io::Result<FileInfo> {
        let metadata = fs::metadata(path)?;

        #[cfg(unix)]
        let unix_mode = {
            use std::os::unix::fs::PermissionsExt as _;
            Some(metadata.permissions().mode())
        };
        #[cfg(not(unix))]
        let unix_mode = None;

        Ok(FileInfo {
            modified: metadata.modified().ok(),
            unix_mode,
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.zip");
        fs::write(&target, b"old contents that are longer").unwrap();

        RealSystem::new().write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_is_file_rejects_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

        let system = RealSystem::new();
        assert!(system.is_file(&temp_dir.path().join("file.txt")));
        assert!(!system.is_file(temp_dir.path()));
        assert!(!system.is_file(&temp_dir.path().join("missing.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_info_reports_mode() {
        use std::os::unix::fs::PermissionsExt as _;

        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let info = RealSystem::new().file_info(&script).unwrap();
        assert_eq!(info.unix_mode.unwrap() & 0o777, 0o755);
        assert!(info.modified.is_some());
    }
}
