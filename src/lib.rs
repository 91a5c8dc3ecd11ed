//! Spark Smoke - a smoke test for a PySpark-style engine client API.
//!
//! Starts a [`SparkSession`], reads line-oriented text into a cached
//! [`DataFrame`], counts the lines containing each configured substring and
//! renders `Lines with a: <N>, lines with b: <M>`. The engine here is an
//! eager, in-process Polars backend behind the
//! [`spark_smoke_core::engine`] traits.

pub mod column;
pub mod config;
pub mod dataframe;
pub mod engine_backend;
pub mod error;
pub mod expr_ir;
pub mod functions;
pub mod prelude;
pub mod session;
pub mod smoke;

/// Re-export for callers building Polars predicates directly.
pub use polars::error::PolarsError;
pub use polars::prelude::DataFrame as PlDataFrame;
pub type Expr = polars::prelude::Expr;

pub use column::Column;
pub use config::SmokeConfig;
pub use dataframe::DataFrame;
pub use error::{EngineError, polars_to_engine_error};
pub use functions::{col, contains};
pub use session::{DataFrameReader, SessionGuard, SparkSession, SparkSessionBuilder};
pub use smoke::{run, run_with_session};
pub use spark_smoke_core::{NeedleCount, SmokeReport, TEXT_COLUMN};
