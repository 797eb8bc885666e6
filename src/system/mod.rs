//! System abstraction for filesystem operations
//!
//! This module provides a unified trait for the filesystem interactions the
//! exporters need, allowing for easy testing with mock implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Metadata carried into archive entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// Last modification time, if the platform reports one
    pub modified: Option<SystemTime>,
    /// Unix permission bits, if known
    pub unix_mode: Option<u32>,
}

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Read entire file contents as bytes
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read entire file contents as a UTF-8 string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, replacing it if it exists
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path points to a regular file, following symlinks
    fn is_file(&self, path: &Path) -> bool;

    /// Get the metadata stored alongside archive entries
    fn file_info(&self, path: &Path) -> io::Result<FileInfo>;
}
