//! Engine error type for embedders (Polars conversion in this crate).

use polars::error::PolarsError;

pub use spark_smoke_core::EngineError;

/// Map PolarsError to the core EngineError for trait boundaries and the CLI.
pub fn polars_to_engine_error(e: PolarsError) -> EngineError {
    let msg = e.to_string();
    match &e {
        PolarsError::ColumnNotFound(_) => EngineError::NotFound(msg),
        PolarsError::InvalidOperation(_) => EngineError::User(msg),
        PolarsError::ComputeError(_) => {
            let lower = msg.to_lowercase();
            if (lower.contains("filter") || lower.contains("predicate"))
                && (lower.contains("boolean") || lower.contains("bool"))
            {
                return EngineError::User(format!(
                    "filter predicate must be Boolean, got non-Boolean expression: {}",
                    msg
                ));
            }
            EngineError::Internal(msg)
        }
        PolarsError::IO { .. } => EngineError::Io(msg),
        _ => EngineError::Other(msg),
    }
}
