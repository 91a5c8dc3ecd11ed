//! SparkSession: entry point for reading text sources; owns the engine lifetime.

mod builder;
mod reader;

pub use builder::SparkSessionBuilder;
pub use reader::DataFrameReader;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::{debug, info};

use crate::config::SmokeConfig;
use crate::dataframe::DataFrame;
use crate::error::EngineError;

/// App name used when the builder was given none.
pub(crate) const FALLBACK_APP_NAME: &str = "spark-smoke";

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Active session for this thread; `get_or_create` attaches to it while it is running.
    static ACTIVE_SESSION: RefCell<Option<SparkSession>> = const { RefCell::new(None) };
}

/// Set the thread's active session (used by the builder).
pub(crate) fn set_active_session(session: SparkSession) {
    ACTIVE_SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

/// Clear the thread's active session if it is `session`.
fn clear_active_session(session: &SparkSession) {
    ACTIVE_SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.as_ref().is_some_and(|s| s.same_session(session)) {
            *slot = None;
        }
    });
}

struct SessionInner {
    id: u64,
    app_name: String,
    master: Option<String>,
    config: HashMap<String, String>,
    case_sensitive: bool,
    stopped: AtomicBool,
}

/// Main entry point for reading data and running queries.
/// Similar to PySpark's SparkSession but using an in-process Polars engine.
///
/// Clones are handles to the same session: stopping one stops all.
#[derive(Clone)]
pub struct SparkSession {
    inner: Arc<SessionInner>,
}

impl SparkSession {
    pub fn new(
        app_name: Option<String>,
        master: Option<String>,
        config: HashMap<String, String>,
    ) -> Self {
        let case_sensitive = config
            .get("spark.sql.caseSensitive")
            .map(|v| spark_smoke_core::config::parse_bool(v))
            .unwrap_or(false);
        let app_name = app_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| FALLBACK_APP_NAME.to_string());
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        info!(session_id = id, app = %app_name, master = ?master, "starting session");
        SparkSession {
            inner: Arc::new(SessionInner {
                id,
                app_name,
                master,
                config,
                case_sensitive,
                stopped: AtomicBool::new(false),
            }),
        }
    }

    pub fn builder() -> SparkSessionBuilder {
        SparkSessionBuilder::new()
    }

    /// Create a session from a [`SmokeConfig`] (app name, master, case sensitivity, extra keys).
    pub fn from_config(config: &SmokeConfig) -> SparkSession {
        Self::builder()
            .app_name(config.app_name.clone())
            .master(config.master.clone())
            .with_config(config)
            .get_or_create()
    }

    /// The running session registered on this thread, if any.
    pub fn active() -> Option<SparkSession> {
        ACTIVE_SESSION.with(|cell| cell.borrow().clone().filter(|s| !s.is_stopped()))
    }

    pub fn app_name(&self) -> &str {
        &self.inner.app_name
    }

    /// Whether column names are matched case-sensitively (`spark.sql.caseSensitive`).
    pub fn is_case_sensitive(&self) -> bool {
        self.inner.case_sensitive
    }

    /// True when both handles refer to the same underlying session.
    pub fn same_session(&self, other: &SparkSession) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Get a DataFrameReader for reading files.
    pub fn read(&self) -> DataFrameReader {
        DataFrameReader::new(self.clone())
    }

    /// Read a line-oriented text source (PySpark: `spark.read.text(path)`).
    pub fn read_text(&self, path: impl AsRef<Path>) -> Result<DataFrame, EngineError> {
        self.read().text(path)
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    pub(crate) fn ensure_active(&self) -> Result<(), EngineError> {
        if self.is_stopped() {
            return Err(EngineError::User(format!(
                "session '{}' has been stopped",
                self.inner.app_name
            )));
        }
        Ok(())
    }

    /// Stop the session. Idempotent; later reads fail with a user error.
    pub fn stop(&self) {
        if self.inner.stopped.swap(true, Ordering::SeqCst) {
            debug!(session_id = self.inner.id, "session already stopped");
            return;
        }
        clear_active_session(self);
        info!(session_id = self.inner.id, app = %self.inner.app_name, "session stopped");
    }

    /// Scope the session: it is stopped when the guard drops, on every exit path.
    pub fn guard(self) -> SessionGuard {
        SessionGuard { session: self }
    }
}

impl std::fmt::Debug for SparkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkSession")
            .field("id", &self.inner.id)
            .field("app_name", &self.inner.app_name)
            .field("master", &self.inner.master)
            .field("config", &self.inner.config)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl Default for SparkSession {
    fn default() -> Self {
        Self::builder().get_or_create()
    }
}

/// Owns a session for a scope and stops it on drop.
#[derive(Debug)]
pub struct SessionGuard {
    session: SparkSession,
}

impl SessionGuard {
    pub fn session(&self) -> &SparkSession {
        &self.session
    }
}

impl Deref for SessionGuard {
    type Target = SparkSession;

    fn deref(&self) -> &SparkSession {
        &self.session
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_attaches_to_running_session() {
        let a = SparkSession::builder().app_name("first").get_or_create();
        let b = SparkSession::builder().app_name("second").get_or_create();
        assert!(a.same_session(&b));
        assert_eq!(b.app_name(), "first");
        a.stop();
        let c = SparkSession::builder().app_name("third").get_or_create();
        assert!(!a.same_session(&c));
        assert_eq!(c.app_name(), "third");
        c.stop();
    }

    #[test]
    fn stop_is_idempotent_and_clears_active() {
        let s = SparkSession::builder().app_name("stopper").get_or_create();
        assert!(SparkSession::active().is_some());
        s.stop();
        s.stop();
        assert!(s.is_stopped());
        assert!(SparkSession::active().is_none());
    }

    #[test]
    fn guard_stops_on_drop() {
        let s = SparkSession::builder().app_name("guarded").get_or_create();
        {
            let g = s.clone().guard();
            assert_eq!(g.app_name(), "guarded");
        }
        assert!(s.is_stopped());
    }

    #[test]
    fn empty_app_name_falls_back() {
        let s = SparkSession::new(Some(String::new()), None, HashMap::new());
        assert_eq!(s.app_name(), FALLBACK_APP_NAME);
    }

    #[test]
    fn case_sensitivity_from_config() {
        let mut conf = HashMap::new();
        conf.insert("spark.sql.caseSensitive".to_string(), "true".to_string());
        let s = SparkSession::new(Some("cs".into()), None, conf);
        assert!(s.is_case_sensitive());
    }
}
