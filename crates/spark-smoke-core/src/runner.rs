//! The smoke run: read the text source once, cache it, then count matching
//! lines for each needle against that same cached collection.

use std::path::Path;

use tracing::{debug, info};

use crate::config::SmokeConfig;
use crate::engine::SparkSessionBackend;
use crate::error::EngineError;
use crate::expr::{col, contains};
use crate::report::SmokeReport;

/// Column produced by text sources.
pub const TEXT_COLUMN: &str = "value";

/// Run the filter-and-count queries described by `config` on `session`.
///
/// The session is not stopped here; lifetime belongs to the caller.
pub fn run_smoke(
    session: &dyn SparkSessionBackend,
    config: &SmokeConfig,
) -> Result<SmokeReport, EngineError> {
    config.validate()?;
    if session.is_stopped() {
        return Err(EngineError::User(format!(
            "session '{}' has been stopped",
            session.app_name()
        )));
    }

    let mut reader = session.read()?;
    for (k, v) in config.reader_options() {
        reader.option(&k, &v);
    }
    let source = reader.text(Path::new(&config.input_path))?;
    let lines = source.cache()?;
    debug!(path = %config.input_path, cached = lines.is_cached(), "text source loaded");

    let mut report = SmokeReport::new(session.app_name(), config.input_path.clone());
    for needle in &config.needles {
        let matched = lines.filter(&contains(col(TEXT_COLUMN), needle))?;
        let count = matched.count()?;
        debug!(needle = %needle, count, "filter count");
        report.push(needle.clone(), count);
    }
    info!(app = %session.app_name(), queries = report.counts.len(), "smoke run complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DataFrameBackend, DataFrameReaderBackend};
    use crate::expr::{ExprIr, LiteralValue};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory backend: one string column, evaluated row by row.
    struct MemFrame {
        rows: Arc<Vec<String>>,
        cached: bool,
    }

    fn eval(expr: &ExprIr, row: &str) -> Result<bool, EngineError> {
        match expr {
            ExprIr::Contains(c, needle) => match (c.as_ref(), needle.as_ref()) {
                (ExprIr::Column(name), ExprIr::Lit(LiteralValue::Str(s))) if name == TEXT_COLUMN => {
                    Ok(row.contains(s.as_str()))
                }
                _ => Err(EngineError::User("unsupported contains".into())),
            },
            ExprIr::Not(a) => Ok(!eval(a, row)?),
            ExprIr::And(a, b) => Ok(eval(a, row)? && eval(b, row)?),
            _ => Err(EngineError::User("unsupported expression".into())),
        }
    }

    impl DataFrameBackend for MemFrame {
        fn as_any(&self) -> &(dyn std::any::Any + Send + Sync) {
            self
        }

        fn filter(&self, condition: &ExprIr) -> Result<Box<dyn DataFrameBackend>, EngineError> {
            let mut kept = Vec::new();
            for r in self.rows.iter() {
                if eval(condition, r)? {
                    kept.push(r.clone());
                }
            }
            Ok(Box::new(MemFrame {
                rows: Arc::new(kept),
                cached: false,
            }))
        }

        fn cache(&self) -> Result<Box<dyn DataFrameBackend>, EngineError> {
            Ok(Box::new(MemFrame {
                rows: self.rows.clone(),
                cached: true,
            }))
        }

        fn is_cached(&self) -> bool {
            self.cached
        }

        fn columns(&self) -> Result<Vec<String>, EngineError> {
            Ok(vec![TEXT_COLUMN.to_string()])
        }

        fn count(&self) -> Result<u64, EngineError> {
            Ok(self.rows.len() as u64)
        }
    }

    struct MemReader {
        files: Arc<HashMap<String, Vec<String>>>,
        reads: Arc<AtomicUsize>,
    }

    impl DataFrameReaderBackend for MemReader {
        fn option(&mut self, _key: &str, _value: &str) {}

        fn text(&self, path: &Path) -> Result<Box<dyn DataFrameBackend>, EngineError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let key = path.to_string_lossy().to_string();
            let rows = self
                .files
                .get(&key)
                .cloned()
                .ok_or_else(|| EngineError::NotFound(format!("Path does not exist: {key}")))?;
            Ok(Box::new(MemFrame {
                rows: Arc::new(rows),
                cached: false,
            }))
        }
    }

    struct MemSession {
        files: Arc<HashMap<String, Vec<String>>>,
        reads: Arc<AtomicUsize>,
        stopped: AtomicBool,
    }

    impl MemSession {
        fn with_file(path: &str, lines: &[&str]) -> Self {
            let mut files = HashMap::new();
            files.insert(
                path.to_string(),
                lines.iter().map(|s| s.to_string()).collect(),
            );
            MemSession {
                files: Arc::new(files),
                reads: Arc::new(AtomicUsize::new(0)),
                stopped: AtomicBool::new(false),
            }
        }
    }

    impl SparkSessionBackend for MemSession {
        fn app_name(&self) -> &str {
            "mem"
        }

        fn read(&self) -> Result<Box<dyn DataFrameReaderBackend>, EngineError> {
            Ok(Box::new(MemReader {
                files: self.files.clone(),
                reads: self.reads.clone(),
            }))
        }

        fn is_stopped(&self) -> bool {
            self.stopped.load(Ordering::SeqCst)
        }

        fn stop(&self) {
            self.stopped.store(true, Ordering::SeqCst);
        }
    }

    fn config_for(path: &str) -> SmokeConfig {
        SmokeConfig {
            input_path: path.to_string(),
            ..SmokeConfig::default()
        }
    }

    #[test]
    fn counts_fruit_lines() {
        let s = MemSession::with_file("/abc", &["banana", "apple", "cherry"]);
        let report = run_smoke(&s, &config_for("/abc")).unwrap();
        assert_eq!(report.to_string(), "Lines with a: 2, lines with b: 1");
        assert_eq!(s.reads.load(Ordering::SeqCst), 1);
        assert!(!s.is_stopped());
    }

    #[test]
    fn empty_source_counts_zero() {
        let s = MemSession::with_file("/abc", &[]);
        let report = run_smoke(&s, &config_for("/abc")).unwrap();
        assert_eq!(report.to_string(), "Lines with a: 0, lines with b: 0");
    }

    #[test]
    fn line_with_both_needles_counts_for_each() {
        let s = MemSession::with_file("/abc", &["banana"]);
        let report = run_smoke(&s, &config_for("/abc")).unwrap();
        assert_eq!(report.count_for("a"), Some(1));
        assert_eq!(report.count_for("b"), Some(1));
    }

    #[test]
    fn missing_source_is_not_found() {
        let s = MemSession::with_file("/abc", &["a"]);
        let err = run_smoke(&s, &config_for("/nope")).unwrap_err();
        assert!(err.is_not_found(), "{err}");
    }

    #[test]
    fn stopped_session_is_rejected_before_reading() {
        let s = MemSession::with_file("/abc", &["a"]);
        s.stop();
        let err = run_smoke(&s, &config_for("/abc")).unwrap_err();
        assert!(matches!(err, EngineError::User(_)));
        assert_eq!(s.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let s = MemSession::with_file("/abc", &["a"]);
        let config = SmokeConfig {
            needles: vec![],
            ..config_for("/abc")
        };
        assert!(matches!(run_smoke(&s, &config), Err(EngineError::User(_))));
    }
}
