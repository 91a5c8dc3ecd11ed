//! Engine-agnostic DataFrame backend trait.

use crate::error::EngineError;
use crate::expr::ExprIr;

/// Backend for DataFrame operations. All expression arguments use ExprIr.
pub trait DataFrameBackend: Send + Sync {
    /// For downcasting to the concrete backend type.
    fn as_any(&self) -> &(dyn std::any::Any + Send + Sync);

    fn filter(&self, condition: &ExprIr) -> Result<Box<dyn DataFrameBackend>, EngineError>;
    /// Mark the collection for reuse across actions. Returns a handle over the same data.
    fn cache(&self) -> Result<Box<dyn DataFrameBackend>, EngineError>;
    fn is_cached(&self) -> bool;

    fn columns(&self) -> Result<Vec<String>, EngineError>;
    fn count(&self) -> Result<u64, EngineError>;
}
