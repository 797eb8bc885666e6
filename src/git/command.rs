//! Invocation of the external `git` command

use crate::error::ExportError;
use anyhow::Result;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Run `git <args>` inside `repo_path` and return its standard output
///
/// # Errors
///
/// Returns an error if:
/// - The Git command cannot be spawned
/// - Git exits with a non-zero status (for example outside a repository)
#[inline]
pub fn git_output(repo_path: &Path, args: &[&str]) -> Result<Vec<u8>> {
    debug!("Running git {} in {}", args.join(" "), repo_path.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(|e| {
            return ExportError::git(format!(
                "Failed to execute git {} in '{}': {e}",
                args.first().copied().unwrap_or_default(),
                repo_path.display()
            ));
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::git(format!(
            "git {} failed in '{}': {}",
            args.join(" "),
            repo_path.display(),
            stderr.trim()
        ))
        .into());
    }

    Ok(output.stdout)
}

/// Check if Git is installed and runnable
///
/// # Errors
///
/// Returns an error if:
/// - The Git command is not found
/// - The Git command failed to execute properly
#[inline]
pub fn check_git_availability() -> Result<()> {
    let output = Command::new("git").args(["--version"]).output().map_err(|_| {
        return ExportError::git(
            "Git command not found. Please ensure Git is installed and available in PATH",
        );
    })?;

    if !output.status.success() {
        return Err(ExportError::git("Git command failed to execute properly").into());
    }

    debug!(
        "Using {}",
        String::from_utf8_lossy(&output.stdout).trim()
    );

    Ok(())
}
