use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for repo-export
#[derive(Parser, Debug, Clone)]
#[command(name = "repo-export")]
#[command(about = "Export Git repository files to a zip archive or an XML document")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Path to the Git repository (default is current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format: zip or xml
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Include untracked files that are not ignored
    #[arg(
        long,
        env = "REPO_EXPORT_UNTRACKED",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub untracked: bool,

    /// List out the files that would be exported
    #[arg(long)]
    pub info: bool,

    /// Write the export to FILE instead of <repository>.<format>
    #[arg(short, long, value_name = "FILE", conflicts_with = "info")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output encodings supported by the exporter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Zip archive holding a copy of every file
    #[value(alias = "archive")]
    Zip,
    /// XML document embedding the text of every file
    #[value(alias = "document")]
    Xml,
}

impl ExportFormat {
    /// File extension used for the default output name
    #[must_use]
    #[inline]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Xml => "xml",
        }
    }

    /// Default output file name for a repository called `repo_name`
    #[must_use]
    #[inline]
    pub fn output_file_name(self, repo_name: &str) -> String {
        format!("{repo_name}.{}", self.extension())
    }
}
