//! Mock system implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::{FileInfo, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem, perfect for fast,
/// isolated unit tests of the exporters without side effects.
///
/// # Example
/// ```
/// use repo_export::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/repo/a.txt", b"hello").unwrap()
///     .with_dir("/repo/src").unwrap();
///
/// assert!(system.is_file(Path::new("/repo/a.txt")));
/// assert!(!system.is_file(Path::new("/repo/src")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    modes: HashMap<PathBuf, u32>,
    unreadable: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                modes: HashMap::new(),
                unreadable: HashSet::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set the current working directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mock state lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.current_dir = dir.as_ref().to_path_buf();
        Self::ensure_parent_dirs(&mut state.dirs, dir.as_ref());
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mock state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Ensure parent directories exist
        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a file with Unix permission bits (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mock state lock is poisoned
    #[inline]
    pub fn with_mode_file<P: AsRef<Path>>(
        self,
        path: P,
        contents: &[u8],
        mode: u32,
    ) -> io::Result<Self> {
        let system = self.with_file(path.as_ref(), contents)?;
        let mut state = system
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.modes.insert(path.as_ref().to_path_buf(), mode);
        drop(state);
        Ok(system)
    }

    /// Add a file that exists but fails every read (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mock state lock is poisoned
    #[inline]
    pub fn with_unreadable_file<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let system = self.with_file(path.as_ref(), b"")?;
        let mut state = system
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.unreadable.insert(path.as_ref().to_path_buf());
        drop(state);
        Ok(system)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mock state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    /// Get the bytes stored at `path`, if any
    #[must_use]
    #[inline]
    pub fn file_contents<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        let state = self.state.read().ok()?;
        state.files.get(path.as_ref()).cloned()
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        let mut ancestors = Vec::new();
        let mut current = path;

        // Collect all ancestors
        while let Some(parent) = current.parent() {
            ancestors.push(parent.to_path_buf());
            current = parent;
            if parent == Path::new("") || parent == Path::new("/") {
                break;
            }
        }

        // Insert all ancestors and the path itself
        for ancestor in ancestors {
            dirs.insert(ancestor);
        }
        dirs.insert(path.to_path_buf());
    }

    #[inline]
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.current_dir()?.join(path))
        }
    }

    #[inline]
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        let path = self.resolve(path)?;
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if state.unreadable.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }

        let bytes = state.files.get(&path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        Ok(result)
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.current_dir.clone())
    }

    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.read_bytes(path)
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(path)?;
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Ensure parent directories exist
        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path, contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        let Ok(path) = self.resolve(path) else {
            return false;
        };
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(&path))
    }

    #[inline]
    fn file_info(&self, path: &Path) -> io::Result<FileInfo> {
        let path = self.resolve(path)?;
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !state.files.contains_key(&path) && !state.dirs.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Path not found: {}", path.display()),
            ));
        }

        Ok(FileInfo {
            modified: None,
            unix_mode: state.modes.get(&path).copied(),
        })
    }
}
