//! DataFrame: an immutable, shared record collection with cache marking.

use std::sync::Arc;

use polars::prelude::{DataFrame as PlDataFrame, Expr, IntoLazy, PolarsError};
use spark_smoke_core::ExprIr;
use tracing::debug;

use crate::column::Column;
use crate::error::{EngineError, polars_to_engine_error};
use crate::expr_ir::expr_ir_to_expr;

/// Default for `spark.sql.caseSensitive` (PySpark default is false = case-insensitive).
const DEFAULT_CASE_SENSITIVE: bool = false;

/// DataFrame - main tabular data structure.
/// Thin wrapper around an eager Polars `DataFrame`. Clones share the
/// materialized data, so every query over a cached frame sees the same rows.
#[derive(Clone)]
pub struct DataFrame {
    pub(crate) df: Arc<PlDataFrame>,
    /// When false (default), column names are matched case-insensitively (PySpark behavior).
    pub(crate) case_sensitive: bool,
    cached: bool,
}

impl DataFrame {
    /// Create a new DataFrame from a Polars DataFrame (case-insensitive column matching by default).
    pub fn from_polars(df: PlDataFrame) -> Self {
        Self::from_polars_with_options(df, DEFAULT_CASE_SENSITIVE)
    }

    /// Create a new DataFrame from a Polars DataFrame with explicit case sensitivity.
    pub fn from_polars_with_options(df: PlDataFrame, case_sensitive: bool) -> Self {
        DataFrame {
            df: Arc::new(df),
            case_sensitive,
            cached: false,
        }
    }

    /// Create an empty DataFrame
    pub fn empty() -> Self {
        Self::from_polars(PlDataFrame::empty())
    }

    /// Resolve a logical column name to the actual column name in the schema.
    /// When case_sensitive is false, matches case-insensitively.
    pub fn resolve_column_name(&self, name: &str) -> Result<String, PolarsError> {
        let names = self.df.get_column_names();
        if self.case_sensitive {
            if names.iter().any(|n| n.as_str() == name) {
                return Ok(name.to_string());
            }
        } else {
            let name_lower = name.to_lowercase();
            if let Some(n) = names.iter().find(|n| n.to_lowercase() == name_lower) {
                return Ok(n.to_string());
            }
        }
        let available: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        Err(PolarsError::ColumnNotFound(
            format!(
                "Column '{}' not found. Available columns: [{}]. Check spelling and case sensitivity (spark.sql.caseSensitive).",
                name,
                available.join(", ")
            )
            .into(),
        ))
    }

    /// Get column names
    pub fn columns(&self) -> Result<Vec<String>, PolarsError> {
        Ok(self
            .df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect())
    }

    /// Count the number of rows (action - triggers execution)
    pub fn count(&self) -> Result<usize, PolarsError> {
        Ok(self.df.height())
    }

    /// Collect the DataFrame (action - triggers execution)
    pub fn collect(&self) -> Result<Arc<PlDataFrame>, PolarsError> {
        Ok(self.df.clone())
    }

    /// Values of a string column in row order (nulls become empty strings).
    pub fn collect_strings(&self, column: &str) -> Result<Vec<String>, PolarsError> {
        let name = self.resolve_column_name(column)?;
        let values = self.df.column(name.as_str())?.str()?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect())
    }

    /// Filter rows using a Polars expression.
    pub fn filter(&self, condition: Expr) -> Result<DataFrame, PolarsError> {
        let lf = self.df.as_ref().clone().lazy().filter(condition);
        let df = lf.collect()?;
        Ok(DataFrame::from_polars_with_options(df, self.case_sensitive))
    }

    /// Filter rows using engine-agnostic IR. Column references resolve per case sensitivity.
    pub fn filter_expr_ir(&self, condition: &ExprIr) -> Result<DataFrame, EngineError> {
        let expr = expr_ir_to_expr(condition, &|name: &str| {
            self.resolve_column_name(name).map_err(polars_to_engine_error)
        })?;
        self.filter(expr).map_err(polars_to_engine_error)
    }

    /// Get a column reference by name (for building expressions).
    /// Respects case sensitivity: when false, "VALUE" resolves to column "value".
    pub fn column(&self, name: &str) -> Result<Column, PolarsError> {
        let resolved = self.resolve_column_name(name)?;
        Ok(Column::new(resolved))
    }

    /// Mark for reuse across actions. PySpark cache. Data is already
    /// materialized; the returned frame shares it.
    pub fn cache(&self) -> Result<DataFrame, PolarsError> {
        debug!(rows = self.df.height(), "cache");
        Ok(DataFrame {
            cached: true,
            ..self.clone()
        })
    }

    /// PySpark unpersist. Clears the cache mark.
    pub fn unpersist(&self) -> Result<DataFrame, PolarsError> {
        Ok(DataFrame {
            cached: false,
            ..self.clone()
        })
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }

    /// True if both frames are backed by the same materialized data.
    pub fn shares_data_with(&self, other: &DataFrame) -> bool {
        Arc::ptr_eq(&self.df, &other.df)
    }

    /// True if the DataFrame has zero rows. PySpark isEmpty.
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }
}

impl std::fmt::Debug for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFrame")
            .field("columns", &self.df.get_column_names())
            .field("rows", &self.df.height())
            .field("cached", &self.cached)
            .finish()
    }
}
