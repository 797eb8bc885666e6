//! Listing of the files a repository export covers

use crate::git::git_output;
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Ordered list of repository-relative file paths, as reported by git
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<String>,
}

impl FileList {
    /// Number of listed paths
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing was listed
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in listing order
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.paths.iter()
    }

    /// The paths as a slice
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    /// Parse NUL-separated `git ls-files -z` output
    ///
    /// Repeated paths keep their first position; git prints an unmerged path
    /// once per conflict stage.
    #[must_use]
    pub fn from_nul_separated(output: &[u8]) -> Self {
        let mut seen = HashSet::new();
        let paths = output
            .split(|&byte| byte == 0)
            .filter(|entry| !entry.is_empty())
            .map(|entry| String::from_utf8_lossy(entry).into_owned())
            .filter(|path| seen.insert(path.clone()))
            .collect();

        Self { paths }
    }
}

impl<S: Into<String>> FromIterator<S> for FileList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'list> IntoIterator for &'list FileList {
    type Item = &'list String;
    type IntoIter = core::slice::Iter<'list, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// List tracked files, and optionally untracked files that are not ignored
///
/// Paths are relative to `repo_path`. Untracked files honour `.gitignore`,
/// `.git/info/exclude` and the user's global excludes file.
///
/// # Errors
///
/// Returns an error if:
/// - Git is not available
/// - `repo_path` does not exist or is not inside a Git repository
pub fn list_files(repo_path: &Path, include_untracked: bool) -> Result<FileList> {
    let mut args = vec!["ls-files", "-z", "--cached"];
    if include_untracked {
        args.extend(["--others", "--exclude-standard"]);
    }

    let output = git_output(repo_path, &args)?;
    let files = FileList::from_nul_separated(&output);

    debug!(
        "Listed {} files in {} (untracked: {})",
        files.len(),
        repo_path.display(),
        include_untracked
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nul_separated() {
        let files = FileList::from_nul_separated(b"a.txt\0src/lib.rs\0");
        assert_eq!(files.as_slice(), ["a.txt", "src/lib.rs"]);
    }

    #[test]
    fn test_parse_keeps_unusual_names_verbatim() {
        let files = FileList::from_nul_separated("with space.txt\0tab\there\0caf\u{e9}.md\0".as_bytes());
        assert_eq!(files.as_slice(), ["with space.txt", "tab\there", "caf\u{e9}.md"]);
    }

    #[test]
    fn test_parse_drops_duplicates_keeping_order() {
        let files = FileList::from_nul_separated(b"b.txt\0conflict.txt\0conflict.txt\0a.txt\0");
        assert_eq!(files.as_slice(), ["b.txt", "conflict.txt", "a.txt"]);
    }

    #[test]
    fn test_parse_empty_output() {
        let files = FileList::from_nul_separated(b"");
        assert!(files.is_empty());
        assert_eq!(files.len(), 0);
    }

    #[test]
    fn test_collect_from_strings() {
        let files: FileList = ["a.txt", "b.txt"].into_iter().collect();
        let collected: Vec<&String> = files.iter().collect();
        assert_eq!(collected, ["a.txt", "b.txt"]);
    }
}
