//! Test utilities for row reader testing
//!
//! Shared helpers for writing throwaway export files consumed by the
//! reader tests.

use std::io::Write;
use tempfile::NamedTempFile;

mod header_tests;
#[cfg(feature = "xlsx")]
mod xlsx_tests;

/// Helper to create a temporary file with the given extension and raw bytes
pub fn create_temp_file_with_ext(extension: &str, bytes: &[u8]) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    temp_file.write_all(bytes).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary `.csv` file with the given content
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    create_temp_file_with_ext("csv", content.as_bytes())
}

/// A small, well-formed messaging export
pub fn create_test_export_csv() -> String {
    "timestamp,from,to,message,uniqid\n\
     2026-02-21 10:00:00,Alice,Bob,Hello,1\n\
     2026-02-21 10:01:00,Bob,Alice,Hi,2\n\
     2026-02-21 10:02:00,Alice,Bob,How are you?,3\n"
        .to_string()
}
