//! DataFrameReader for line-oriented text sources.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::df;
use spark_smoke_core::TEXT_COLUMN;
use tracing::debug;

use crate::dataframe::DataFrame;
use crate::error::{EngineError, polars_to_engine_error};

use super::SparkSession;

/// DataFrameReader for reading text files
/// Similar to PySpark's DataFrameReader with option/options/format/load
pub struct DataFrameReader {
    pub(super) session: SparkSession,
    /// Keys are stored lowercased; option names are case-insensitive.
    options: HashMap<String, String>,
    format: Option<String>,
}

impl DataFrameReader {
    pub fn new(session: SparkSession) -> Self {
        DataFrameReader {
            session,
            options: HashMap::new(),
            format: None,
        }
    }

    /// Add a single option (PySpark: option(key, value)). Returns self for chaining.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_option(key.into(), value.into());
        self
    }

    /// Add multiple options (PySpark: options(**kwargs)). Returns self for chaining.
    pub fn options(mut self, opts: impl IntoIterator<Item = (String, String)>) -> Self {
        for (k, v) in opts {
            self.set_option(k, v);
        }
        self
    }

    pub(crate) fn set_option(&mut self, key: String, value: String) {
        self.options.insert(key.to_lowercase(), value);
    }

    /// Set the format for load() (PySpark: format("text")).
    pub fn format(mut self, fmt: impl Into<String>) -> Self {
        self.format = Some(fmt.into());
        self
    }

    /// Load data from path using format (or infer from extension) and options.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DataFrame, EngineError> {
        let path = path.as_ref();
        let fmt = self.format.clone().or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_lowercase())
        });
        match fmt.as_deref() {
            Some("text") | Some("txt") | Some("log") => self.text(path),
            Some(other) => Err(EngineError::User(format!(
                "load: unsupported format '{other}'. Only format('text') is available."
            ))),
            None => Err(EngineError::User(format!(
                "load: could not infer format for path '{}'. Use format('text') before load.",
                path.display()
            ))),
        }
    }

    fn line_sep(&self) -> Result<Option<&str>, EngineError> {
        match self.options.get("linesep").map(String::as_str) {
            Some("") => Err(EngineError::User("lineSep must be non-empty".into())),
            other => Ok(other),
        }
    }

    fn wholetext(&self) -> bool {
        self.options
            .get("wholetext")
            .is_some_and(|v| spark_smoke_core::config::parse_bool(v))
    }

    /// Read text into a DataFrame with one string column `value`, one row per line.
    ///
    /// Lines end at `\n`, `\r\n` or `\r` unless `lineSep` is set; `wholetext`
    /// yields one row per file. A directory reads every visible file in name order.
    pub fn text(&self, path: impl AsRef<Path>) -> Result<DataFrame, EngineError> {
        self.session.ensure_active()?;
        let path = path.as_ref();
        let line_sep = self.line_sep()?;
        let wholetext = self.wholetext();

        let files = input_files(path)?;
        let mut lines: Vec<String> = Vec::new();
        for file in &files {
            let bytes = fs::read(file)?;
            let text = String::from_utf8_lossy(&bytes);
            if wholetext {
                lines.push(text.into_owned());
            } else {
                match line_sep {
                    Some(sep) => split_on(&text, sep, &mut lines),
                    None => split_lines(&text, &mut lines),
                }
            }
        }
        debug!(
            path = %path.display(),
            files = files.len(),
            records = lines.len(),
            "read text"
        );

        let pl_df = df!(TEXT_COLUMN => lines).map_err(polars_to_engine_error)?;
        Ok(DataFrame::from_polars_with_options(
            pl_df,
            self.session.is_case_sensitive(),
        ))
    }
}

/// Files behind `path`: the file itself, or the visible regular files of a directory.
fn input_files(path: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            EngineError::NotFound(format!("Path does not exist: {}", path.display()))
        }
        _ => EngineError::Io(format!("{}: {e}", path.display())),
    })?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }
        // Follows symlinks; a dangling link is skipped.
        match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => files.push(entry.path()),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %entry.path().display(), "skipping dangling link");
            }
            Err(e) => return Err(e.into()),
        }
    }
    files.sort();
    Ok(files)
}

/// Split on `\n`, `\r\n` and `\r`. A trailing terminator does not start a new record.
fn split_lines(text: &str, out: &mut Vec<String>) {
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                out.push(rest[..i].to_string());
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                out.push(rest.to_string());
                break;
            }
        }
    }
}

/// Split on an explicit separator, with the same trailing-separator rule.
fn split_on(text: &str, sep: &str, out: &mut Vec<String>) {
    if text.is_empty() {
        return;
    }
    let body = text.strip_suffix(sep).unwrap_or(text);
    out.extend(body.split(sep).map(str::to_string));
}
