//! Repository metadata used to name exports

use crate::error::ExportError;
use crate::git::git_output;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Top-level directory of the repository containing `repo_path`
///
/// # Errors
///
/// Returns an error if:
/// - Git is not available
/// - `repo_path` is not inside a Git repository
pub fn repository_root(repo_path: &Path) -> Result<PathBuf> {
    let output = git_output(repo_path, &["rev-parse", "--show-toplevel"])?;
    let root = String::from_utf8_lossy(&output).trim_end_matches(['\n', '\r']).to_owned();

    if root.is_empty() {
        return Err(ExportError::git(format!(
            "git did not report a top-level directory for '{}'",
            repo_path.display()
        ))
        .into());
    }

    Ok(PathBuf::from(root))
}

/// Name of the repository, taken from its top-level directory
///
/// # Errors
///
/// Returns an error if:
/// - The repository root cannot be determined
/// - The root has no final path segment
pub fn repository_name(repo_path: &Path) -> Result<String> {
    let root = repository_root(repo_path)?;
    directory_name(&root)
}

/// Final segment of `root`, used as the repository name
fn directory_name(root: &Path) -> Result<String> {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            return ExportError::git(format!(
                "Cannot derive a repository name from '{}'",
                root.display()
            ))
            .into();
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_name() {
        assert_eq!(directory_name(Path::new("/home/user/demo")).unwrap(), "demo");
        assert_eq!(directory_name(Path::new("C:/work/my-repo")).unwrap(), "my-repo");
    }

    #[test]
    fn test_directory_name_of_filesystem_root() {
        assert!(directory_name(Path::new("/")).is_err());
    }
}
