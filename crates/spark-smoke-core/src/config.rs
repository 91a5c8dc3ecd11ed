//! Configuration for smoke runs.
//!
//! Use [`SmokeConfig`] to configure a run from code or environment variables,
//! then create a session with `SparkSession::from_config` in the root crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DEFAULT_APP_NAME: &str = "SimpleApp";
pub const DEFAULT_MASTER: &str = "local[*]";
pub const DEFAULT_INPUT_PATH: &str = "/abc";
pub const DEFAULT_NEEDLES: [&str; 2] = ["a", "b"];

pub const ENV_APP_NAME: &str = "SPARK_SMOKE_APP_NAME";
pub const ENV_MASTER: &str = "SPARK_SMOKE_MASTER";
pub const ENV_INPUT: &str = "SPARK_SMOKE_INPUT";
pub const ENV_NEEDLES: &str = "SPARK_SMOKE_NEEDLES";
pub const ENV_CASE_SENSITIVE: &str = "SPARK_SMOKE_CASE_SENSITIVE";
pub const ENV_LINE_SEP: &str = "SPARK_SMOKE_LINE_SEP";
pub const ENV_WHOLETEXT: &str = "SPARK_SMOKE_WHOLETEXT";

/// Named parameters of a smoke run. Defaults reproduce the classic
/// `SimpleApp` check: read `/abc`, count lines containing `a` and `b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Application name shown by the engine (must be non-empty).
    pub app_name: String,
    /// Engine master URL; recorded on the session, not interpreted.
    pub master: String,
    /// Line-oriented text resource (file or directory).
    pub input_path: String,
    /// Substrings to count, one query each, in report order.
    pub needles: Vec<String>,
    /// Column name resolution (`spark.sql.caseSensitive`). Does not affect
    /// substring matching, which is always case-sensitive.
    pub case_sensitive: bool,
    /// Explicit line separator; `None` splits on `\n`, `\r\n` and `\r`.
    pub line_sep: Option<String>,
    /// Read each file as a single record.
    pub wholetext: bool,
    /// Extra session config entries (key -> value).
    pub extra: HashMap<String, String>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        SmokeConfig {
            app_name: DEFAULT_APP_NAME.to_string(),
            master: DEFAULT_MASTER.to_string(),
            input_path: DEFAULT_INPUT_PATH.to_string(),
            needles: DEFAULT_NEEDLES.iter().map(|s| s.to_string()).collect(),
            case_sensitive: false,
            line_sep: None,
            wholetext: false,
            extra: HashMap::new(),
        }
    }
}

impl SmokeConfig {
    /// Build config from `SPARK_SMOKE_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SmokeConfig::default();
        if let Some(v) = lookup(ENV_APP_NAME) {
            config.app_name = v;
        }
        if let Some(v) = lookup(ENV_MASTER) {
            config.master = v;
        }
        if let Some(v) = lookup(ENV_INPUT) {
            config.input_path = v;
        }
        if let Some(v) = lookup(ENV_NEEDLES) {
            let needles: Vec<String> = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();
            if !needles.is_empty() {
                config.needles = needles;
            }
        }
        if let Some(v) = lookup(ENV_CASE_SENSITIVE) {
            config.case_sensitive = parse_bool(&v);
        }
        if let Some(v) = lookup(ENV_LINE_SEP) {
            if !v.is_empty() {
                config.line_sep = Some(v);
            }
        }
        if let Some(v) = lookup(ENV_WHOLETEXT) {
            config.wholetext = parse_bool(&v);
        }
        config
    }

    /// Reject configs the engine cannot run.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.app_name.trim().is_empty() {
            return Err(EngineError::User("app name must be non-empty".into()));
        }
        if self.needles.is_empty() {
            return Err(EngineError::User(
                "at least one substring to count is required".into(),
            ));
        }
        if self.input_path.is_empty() {
            return Err(EngineError::User("input path must be non-empty".into()));
        }
        if matches!(self.line_sep.as_deref(), Some("")) {
            return Err(EngineError::User("lineSep must be non-empty".into()));
        }
        Ok(())
    }

    /// Session config entries (`spark.*` keys plus `extra`).
    pub fn to_session_config(&self) -> HashMap<String, String> {
        let mut out = self.extra.clone();
        out.insert("spark.app.name".into(), self.app_name.clone());
        out.insert("spark.master".into(), self.master.clone());
        out.insert(
            "spark.sql.caseSensitive".into(),
            self.case_sensitive.to_string(),
        );
        out
    }

    /// Reader options (`lineSep`, `wholetext`) for the text source.
    pub fn reader_options(&self) -> Vec<(String, String)> {
        let mut opts = Vec::new();
        if let Some(sep) = &self.line_sep {
            opts.push(("lineSep".to_string(), sep.clone()));
        }
        if self.wholetext {
            opts.push(("wholetext".to_string(), "true".to_string()));
        }
        opts
    }
}

pub fn parse_bool(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
