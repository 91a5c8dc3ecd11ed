//! Builder for creating a SparkSession with configuration options.

use std::collections::HashMap;

use spark_smoke_core::SmokeConfig;
use tracing::debug;

use super::{SparkSession, set_active_session};

/// Builder for creating a SparkSession with configuration options
#[derive(Clone)]
pub struct SparkSessionBuilder {
    app_name: Option<String>,
    master: Option<String>,
    config: HashMap<String, String>,
}

impl Default for SparkSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkSessionBuilder {
    pub fn new() -> Self {
        SparkSessionBuilder {
            app_name: None,
            master: None,
            config: HashMap::new(),
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn master(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    pub fn config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Return the thread's running session if there is one, otherwise start a new one.
    /// Builder settings only apply to a newly started session.
    pub fn get_or_create(self) -> SparkSession {
        if let Some(active) = SparkSession::active() {
            debug!(app = %active.app_name(), "attaching to active session");
            return active;
        }
        let session = SparkSession::new(self.app_name, self.master, self.config);
        set_active_session(session.clone());
        session
    }

    /// Apply configuration from a [`SmokeConfig`].
    /// Merges case sensitivity and extra keys into the builder config.
    pub fn with_config(mut self, config: &SmokeConfig) -> Self {
        for (k, v) in config.to_session_config() {
            self.config.insert(k, v);
        }
        self
    }
}
