use polars::prelude::{Expr, col, lit};

/// Column - represents a column in a DataFrame, used for building expressions
/// Thin wrapper around Polars `Expr`.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    expr: Expr, // Polars expression for lazy evaluation
}

impl Column {
    /// Create a new Column from a column name
    pub fn new(name: String) -> Self {
        Column {
            expr: col(name.as_str()),
            name,
        }
    }

    /// Convert to Polars Expr (consumes self)
    pub fn into_expr(self) -> Expr {
        self.expr
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True where the string value contains `substring` (literal, case-sensitive).
    /// PySpark Column.contains.
    pub fn contains(&self, substring: &str) -> Column {
        Column {
            name: format!("contains({}, {})", self.name, substring),
            expr: self.expr.clone().str().contains_literal(lit(substring)),
        }
    }

    /// Logical NOT
    pub fn not(&self) -> Column {
        Column {
            name: format!("(NOT {})", self.name),
            expr: self.expr.clone().not(),
        }
    }

    /// Logical AND
    pub fn and(&self, other: &Column) -> Column {
        Column {
            name: format!("({} AND {})", self.name, other.name),
            expr: self.expr.clone().and(other.expr.clone()),
        }
    }
}
