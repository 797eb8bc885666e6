//! Export operation coordination

use crate::cli::ExportFormat;
use crate::config::ExportTarget;
use crate::error::ExportError;
use crate::git::{check_git_availability, list_files, repository_name};
use crate::operations::{write_archive, write_document};
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File the export was written to, as it should be reported
    pub output: PathBuf,
}

/// Coordinates listing, naming, serializing and writing one export
#[non_exhaustive]
#[expect(clippy::module_name_repetitions, reason = "ExportOperation")]
pub struct ExportOperation<'src> {
    target: ExportTarget,
    format: ExportFormat,
    system: &'src dyn System,
}

impl<'src> ExportOperation<'src> {
    /// Create a new export operation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target has no output format
    /// - Git is not available
    #[inline]
    pub fn new(target: ExportTarget, system: &'src dyn System) -> Result<Self> {
        let format = target.format.ok_or(ExportError::MissingFormat)?;

        check_git_availability().context("Git validation failed")?;

        Ok(ExportOperation {
            target,
            format,
            system,
        })
    }

    /// Output file for this export
    ///
    /// The explicit output wins; otherwise `<repository>.<extension>` relative
    /// to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository name cannot be resolved
    #[inline]
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = &self.target.output {
            return Ok(output.clone());
        }

        let name = repository_name(&self.target.repo_path)?;
        debug!("Repository name: {name}");
        Ok(PathBuf::from(self.format.output_file_name(&name)))
    }

    /// Execute the export
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Git cannot list the files or resolve the repository name
    /// - A listed file cannot be archived
    /// - The output file cannot be written
    #[inline]
    pub fn execute(&self) -> Result<ExportSummary> {
        let output = self.output_path()?;
        let files = list_files(&self.target.repo_path, self.target.include_untracked)?;

        info!(
            "Exporting {} files from {} as {}",
            files.len(),
            self.target.repo_path.display(),
            self.format.extension()
        );

        let bytes = match self.format {
            ExportFormat::Zip => write_archive(self.system, &self.target.repo_path, &files)?,
            ExportFormat::Xml => write_document(self.system, &self.target.repo_path, &files)?,
        };

        let destination = self
            .system
            .current_dir()
            .map_err(|e| {
                return ExportError::filesystem(format!("Cannot get current directory: {e}"));
            })?
            .join(&output);

        self.system.write(&destination, &bytes).map_err(|e| {
            return ExportError::filesystem(format!(
                "Failed to write '{}': {e}",
                destination.display()
            ));
        })?;

        debug!("Wrote {} bytes to {}", bytes.len(), destination.display());

        Ok(ExportSummary { output })
    }
}
