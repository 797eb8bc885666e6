//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for repo-export operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    /// Neither `--info` nor `--format` was given
    #[error("no output format or info mode requested")]
    Usage,

    /// An export was requested without choosing a format
    #[error("--format is required when not using --info.")]
    MissingFormat,

    /// Git Error - the git command is missing or failed
    #[error("Git error: {message}")]
    Git { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Serialization Error - the archive or XML writer failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ExportError {
    /// Get the appropriate exit code for this error type
    ///
    /// Usage problems are reported but are not failures.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Usage | Self::MissingFormat => 0,
            Self::Git { .. } => 4,
            Self::Filesystem { .. } => 5,
            Self::Serialization { .. } => 6,
        }
    }

    /// Whether this error is a usage problem rather than a failed operation
    #[must_use]
    #[inline]
    pub const fn is_usage(&self) -> bool {
        matches!(*self, Self::Usage | Self::MissingFormat)
    }

    /// Create a git error
    #[inline]
    pub fn git<S: Into<String>>(message: S) -> Self {
        Self::Git {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[inline]
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::serialization(format!("zip: {err}"))
    }
}
