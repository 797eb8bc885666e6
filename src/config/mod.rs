//! Configuration management module
//!
//! Turns parsed command-line arguments into the single export target that
//! drives one invocation.

use crate::cli::{Args, ExportFormat};
use std::path::PathBuf;

/// What the user asked for, built once from the invocation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// Repository location
    pub repo_path: PathBuf,
    /// Selected output encoding
    pub format: Option<ExportFormat>,
    /// Include untracked files that are not ignored
    pub include_untracked: bool,
    /// List files instead of exporting them
    pub info_only: bool,
    /// Explicit output file, overriding `<repository>.<extension>`
    pub output: Option<PathBuf>,
}

/// Which path through the program an invocation takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Neither info nor a format was requested
    Usage,
    /// Print the file list
    Info,
    /// Write an export in the given format
    Export(ExportFormat),
}

impl ExportTarget {
    /// Create a target for `repo_path` with everything else off
    #[must_use]
    pub fn new<P: Into<PathBuf>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.into(),
            format: None,
            include_untracked: false,
            info_only: false,
            output: None,
        }
    }

    /// Select the path through the program; info wins over a format
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.info_only {
            return Mode::Info;
        }
        match self.format {
            Some(format) => Mode::Export(format),
            None => Mode::Usage,
        }
    }
}

impl From<&Args> for ExportTarget {
    fn from(args: &Args) -> Self {
        Self {
            repo_path: args.path.clone(),
            format: args.format,
            include_untracked: args.untracked,
            info_only: args.info,
            output: args.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_mode_usage_without_flags() {
        let target = ExportTarget::new(".");
        assert_eq!(target.mode(), Mode::Usage);
    }

    #[test]
    fn test_mode_info_wins_over_format() {
        let args = Args::try_parse_from(["repo-export", "--info", "--format", "xml"]).unwrap();
        let target = ExportTarget::from(&args);
        assert_eq!(target.mode(), Mode::Info);
    }

    #[test]
    fn test_mode_export() {
        let args = Args::try_parse_from(["repo-export", "repo", "-f", "zip", "-o", "out.zip"])
            .unwrap();
        let target = ExportTarget::from(&args);

        assert_eq!(target.mode(), Mode::Export(ExportFormat::Zip));
        assert_eq!(target.repo_path, PathBuf::from("repo"));
        assert_eq!(target.output, Some(PathBuf::from("out.zip")));
        assert!(!target.include_untracked);
    }
}
