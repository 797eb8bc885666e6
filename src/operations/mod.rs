//! Operations module
//!
//! Serializes a repository's file list into an archive or a document and
//! reports the outcome

pub mod archive;
pub mod document;
pub mod export;
pub mod report;

pub use archive::*;
pub use document::*;
pub use export::*;
pub use report::*;
