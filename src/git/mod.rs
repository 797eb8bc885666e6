//! Git operations module
//!
//! Shells out to the `git` command for file listing and repository metadata

pub mod command;
pub mod ls_files;
pub mod repository;

pub use command::*;
pub use ls_files::*;
pub use repository::*;
