//! One-stop prelude for application code and embedding.
//!
//! Use `use spark_smoke::prelude::*` to get the most common types and functions.

pub use crate::column::Column;
pub use crate::config::SmokeConfig;
pub use crate::dataframe::DataFrame;
pub use crate::error::EngineError;
pub use crate::functions::{col, contains};
pub use crate::session::{DataFrameReader, SessionGuard, SparkSession, SparkSessionBuilder};
pub use crate::smoke::{run, run_with_session};
pub use crate::Expr;
pub use spark_smoke_core::SmokeReport;
