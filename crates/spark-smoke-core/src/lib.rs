//! Spark smoke core: config, error, expression IR, engine traits, and the
//! smoke runner (no Polars dependency).

pub mod config;
pub mod engine;
pub mod error;
pub mod expr;
pub mod report;
pub mod runner;

pub use config::SmokeConfig;
pub use error::EngineError;
pub use expr::{ExprIr, LiteralValue};
pub use report::{NeedleCount, SmokeReport};
pub use runner::{TEXT_COLUMN, run_smoke};
