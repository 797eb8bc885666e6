//! Unit tests for console reporting and mode selection

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

use repo_export::config::ExportTarget;
use repo_export::error::ExportError;
use repo_export::git::FileList;
use repo_export::operations::{ExportOperation, print_export_complete, print_file_list};
use repo_export::run_with_output;
use repo_export::system::MockSystem;
use std::path::Path;

#[test]
fn file_list_prints_one_path_per_line() {
    let files: FileList = ["a.txt", "b.txt"].into_iter().collect();
    let mut out = Vec::new();

    print_file_list(&mut out, &files).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a.txt\nb.txt\n");
}

#[test]
fn empty_file_list_prints_nothing() {
    let mut out = Vec::new();
    print_file_list(&mut out, &FileList::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn export_complete_names_output_file() {
    let mut out = Vec::new();
    print_export_complete(&mut out, Path::new("demo.xml")).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Files successfully exported to demo.xml.\n"
    );
}

#[test]
fn run_without_info_or_format_is_usage_error() {
    let system = MockSystem::new();
    let target = ExportTarget::new(".");
    let mut out = Vec::new();

    let err = run_with_output(&target, &system, &mut out).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::Usage)
    ));
    assert!(out.is_empty());
}

#[test]
fn export_operation_requires_format() {
    let system = MockSystem::new();
    let target = ExportTarget::new(".");

    let result = ExportOperation::new(target, &system);

    let Err(err) = result else {
        panic!("export without a format must fail");
    };
    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::MissingFormat)
    ));
}
}
