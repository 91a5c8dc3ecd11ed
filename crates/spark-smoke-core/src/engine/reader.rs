//! Engine-agnostic DataFrameReader backend trait.

use crate::engine::DataFrameBackend;
use crate::error::EngineError;
use std::path::Path;

/// Backend for reading line-oriented text into a DataFrame with a `value` column.
pub trait DataFrameReaderBackend: Send + Sync {
    fn option(&mut self, key: &str, value: &str);
    fn text(&self, path: &Path) -> Result<Box<dyn DataFrameBackend>, EngineError>;
}
