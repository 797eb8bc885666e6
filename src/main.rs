//! # `repo-export`
//!
//! Exports the files of a Git repository to a zip archive or an XML document,
//! or lists the files that would be exported.
//!
//! ## Usage
//!
//! ```sh
//! repo-export --info                 # list tracked files
//! repo-export --format zip           # write <repository>.zip
//! repo-export ../demo -f xml --untracked
//! ```

use anyhow::Result;
use clap::{CommandFactory as _, Parser as _};
use repo_export::cli::Args;
use repo_export::config::ExportTarget;
use repo_export::error::ExportError;
use repo_export::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Info mode prints the file list, so keep the log quiet there
    let log_level = if args.verbose {
        "debug"
    } else if args.info {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let target = ExportTarget::from(&args);
    let system = RealSystem::new();

    match repo_export::run(&target, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            let export_err = err.downcast_ref::<ExportError>();
            match export_err {
                Some(ExportError::Usage) => println!("{}", Args::command().render_usage()),
                Some(usage) if usage.is_usage() => println!("Error: {usage}"),
                _ => error!("{err:#}"),
            }
            std::process::exit(export_err.map_or(1, ExportError::exit_code));
        }
    }
}
