//! Implementations of spark-smoke-core engine traits for the Polars backend.

use std::path::Path;

use polars::prelude::PolarsError;
use spark_smoke_core::engine::{DataFrameBackend, DataFrameReaderBackend, SparkSessionBackend};
use spark_smoke_core::{EngineError, ExprIr};

use crate::dataframe::DataFrame;
use crate::error::polars_to_engine_error;
use crate::session::{DataFrameReader, SparkSession};

fn map_err(e: PolarsError) -> EngineError {
    polars_to_engine_error(e)
}

impl DataFrameBackend for DataFrame {
    fn as_any(&self) -> &(dyn std::any::Any + Send + Sync) {
        self
    }

    fn filter(&self, condition: &ExprIr) -> Result<Box<dyn DataFrameBackend>, EngineError> {
        let df = self.filter_expr_ir(condition)?;
        Ok(Box::new(df))
    }

    fn cache(&self) -> Result<Box<dyn DataFrameBackend>, EngineError> {
        let df = DataFrame::cache(self).map_err(map_err)?;
        Ok(Box::new(df))
    }

    fn is_cached(&self) -> bool {
        DataFrame::is_cached(self)
    }

    fn columns(&self) -> Result<Vec<String>, EngineError> {
        DataFrame::columns(self).map_err(map_err)
    }

    fn count(&self) -> Result<u64, EngineError> {
        DataFrame::count(self).map(|n| n as u64).map_err(map_err)
    }
}

impl DataFrameReaderBackend for DataFrameReader {
    fn option(&mut self, key: &str, value: &str) {
        self.set_option(key.to_string(), value.to_string());
    }

    fn text(&self, path: &Path) -> Result<Box<dyn DataFrameBackend>, EngineError> {
        let df = DataFrameReader::text(self, path)?;
        Ok(Box::new(df))
    }
}

impl SparkSessionBackend for SparkSession {
    fn app_name(&self) -> &str {
        SparkSession::app_name(self)
    }

    fn read(&self) -> Result<Box<dyn DataFrameReaderBackend>, EngineError> {
        self.ensure_active()?;
        Ok(Box::new(SparkSession::read(self)))
    }

    fn is_stopped(&self) -> bool {
        SparkSession::is_stopped(self)
    }

    fn stop(&self) {
        SparkSession::stop(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use spark_smoke_core::expr::{col, contains};

    #[test]
    fn backend_filter_and_count_through_trait() {
        let df = DataFrame::from_polars(df!("value" => &["ab", "a", "b"]).unwrap());
        let backend: &dyn DataFrameBackend = &df;
        let cached = backend.cache().unwrap();
        assert!(cached.is_cached());
        let only_b = cached.filter(&contains(col("value"), "b")).unwrap();
        assert_eq!(only_b.count().unwrap(), 2);
        assert!(!only_b.is_cached());
        assert_eq!(only_b.columns().unwrap(), vec!["value"]);
    }

    #[test]
    fn downcast_to_polars_frame() {
        let df = DataFrame::from_polars(df!("value" => &["x"]).unwrap());
        let boxed: Box<dyn DataFrameBackend> = Box::new(df);
        assert!(boxed.as_any().downcast_ref::<DataFrame>().is_some());
    }
}
