//! Engine-agnostic SparkSession backend trait.

use crate::engine::DataFrameReaderBackend;
use crate::error::EngineError;

/// Backend for SparkSession: creates readers and owns the engine lifetime.
pub trait SparkSessionBackend: Send + Sync {
    fn app_name(&self) -> &str;
    fn read(&self) -> Result<Box<dyn DataFrameReaderBackend>, EngineError>;
    fn is_stopped(&self) -> bool;
    /// Release the session. Idempotent.
    fn stop(&self);
}

// Session builder is backend-specific (not a trait) so the root crate uses the concrete builder.
