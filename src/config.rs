//! Configuration for smoke runs.
//!
//! Use [`SmokeConfig`] to configure a run from code or environment variables
//! (`SPARK_SMOKE_*`), then create a session with
//! [`SparkSession::from_config`](crate::SparkSession::from_config).

pub use spark_smoke_core::SmokeConfig;
pub use spark_smoke_core::config::{
    DEFAULT_APP_NAME, DEFAULT_INPUT_PATH, DEFAULT_MASTER, DEFAULT_NEEDLES,
};
