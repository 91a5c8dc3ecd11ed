//! Shared helpers for integration tests (SparkSession and text source setup).

#![allow(dead_code)]

use spark_smoke::{SmokeConfig, SparkSession};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a SparkSession with a descriptive app name for tests.
pub fn spark() -> SparkSession {
    SparkSession::builder()
        .app_name("spark_smoke_tests")
        .get_or_create()
}

/// Temp file holding `contents` verbatim.
pub fn text_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

/// Temp file with one line per entry, newline-terminated.
pub fn lines_file(lines: &[&str]) -> NamedTempFile {
    let mut body = String::new();
    for l in lines {
        body.push_str(l);
        body.push('\n');
    }
    text_file(&body)
}

/// Default config pointed at `file`.
pub fn config_for(file: &NamedTempFile) -> SmokeConfig {
    SmokeConfig {
        input_path: file.path().to_string_lossy().into_owned(),
        ..SmokeConfig::default()
    }
}
