//! Test utilities for jexpand
//!
//! This crate provides shared testing utilities used across the jexpand workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test files in a single gitignored location that is easy to
/// clean up manually if a test aborts before the `TempDir` is dropped.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use jexpand_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("template.md");
/// std::fs::write(&file_path, "f(\"src/main.rs\")").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a template fixture into `dir` and return its path
///
/// Parent directories inside `dir` are created as needed.
///
/// # Panics
///
/// Panics if the file or its parent directories cannot be written.
pub fn write_template(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write template fixture");
    path
}

/// A small template mixing plain text with several shorthand forms
pub const SAMPLE_TEMPLATE: &str = r#"# Review request

Please review the following code:
f("src/main.rs")

Relevant lines only:
f_s10_e30("src/lib.rs")

Project layout:
dir_xml_lines("src")
"#;

/// [`SAMPLE_TEMPLATE`] after rewriting
pub const SAMPLE_EXPANDED: &str = r#"# Review request

Please review the following code:
{{ include_file('src/main.rs') }}

Relevant lines only:
{{ include_file('src/lib.rs', start_line=10, end_line=30) }}

Project layout:
{{ include_folder('src', format_as='xml', line_numbers='short') }}
"#;
