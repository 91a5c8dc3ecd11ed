//! Engine-agnostic expression IR. Backends convert it to their native
//! expression type; the runner only builds `ExprIr`.

use serde::{Deserialize, Serialize};

/// Literal value in an expression (engine-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    I64(i64),
    Str(String),
}

/// Expression IR: a single, serializable tree that backends convert to their native Expr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprIr {
    /// Column reference: `col("name")`
    Column(String),
    /// Literal value
    Lit(LiteralValue),

    /// Literal (non-regex), case-sensitive substring containment.
    Contains(Box<ExprIr>, Box<ExprIr>),

    // --- Logical ---
    And(Box<ExprIr>, Box<ExprIr>),
    Not(Box<ExprIr>),
}

// ---------- Builder helpers ----------

/// Column reference.
pub fn col(name: &str) -> ExprIr {
    ExprIr::Column(name.to_string())
}

pub fn lit_i64(n: i64) -> ExprIr {
    ExprIr::Lit(LiteralValue::I64(n))
}

pub fn lit_str(s: &str) -> ExprIr {
    ExprIr::Lit(LiteralValue::Str(s.to_string()))
}

pub fn contains(expr: ExprIr, substring: &str) -> ExprIr {
    ExprIr::Contains(Box::new(expr), Box::new(lit_str(substring)))
}

pub fn and(a: ExprIr, b: ExprIr) -> ExprIr {
    ExprIr::And(Box::new(a), Box::new(b))
}

pub fn not(a: ExprIr) -> ExprIr {
    ExprIr::Not(Box::new(a))
}
