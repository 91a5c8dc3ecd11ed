//! Process-level smoke run: acquire a session, run the queries, release the session.

use spark_smoke_core::{EngineError, SmokeConfig, SmokeReport, run_smoke};

use crate::session::SparkSession;

/// Start (or attach to) a session from `config`, run the smoke queries and
/// stop the session, whether or not the run succeeded.
pub fn run(config: &SmokeConfig) -> Result<SmokeReport, EngineError> {
    config.validate()?;
    run_with_session(SparkSession::from_config(config), config)
}

/// Run the smoke queries on `session`; the session is stopped before returning.
pub fn run_with_session(
    session: SparkSession,
    config: &SmokeConfig,
) -> Result<SmokeReport, EngineError> {
    let guard = session.guard();
    run_smoke(guard.session(), config)
}
