//! Convert core ExprIr to Polars Expr. Used when callers pass ExprIr into the backend.

use polars::prelude::{Expr, col, lit};
use spark_smoke_core::{EngineError, ExprIr, LiteralValue};

/// Convert engine-agnostic ExprIr into a Polars Expr.
/// `resolve` maps a logical column name to the frame's actual name.
pub fn expr_ir_to_expr(
    ir: &ExprIr,
    resolve: &dyn Fn(&str) -> Result<String, EngineError>,
) -> Result<Expr, EngineError> {
    match ir {
        ExprIr::Column(name) => Ok(col(resolve(name)?.as_str())),
        ExprIr::Lit(lv) => Ok(lit_from_core(lv)),

        ExprIr::Contains(a, b) => {
            let haystack = expr_ir_to_expr(a, resolve)?;
            match b.as_ref() {
                ExprIr::Lit(LiteralValue::Str(s)) => {
                    Ok(haystack.str().contains_literal(lit(s.as_str())))
                }
                other => Err(EngineError::User(format!(
                    "contains: substring must be a string literal, got {other:?}"
                ))),
            }
        }

        ExprIr::And(a, b) => {
            let l = expr_ir_to_expr(a, resolve)?;
            let r = expr_ir_to_expr(b, resolve)?;
            Ok(l.and(r))
        }
        ExprIr::Not(a) => {
            let x = expr_ir_to_expr(a, resolve)?;
            Ok(x.not())
        }
    }
}

fn lit_from_core(lv: &LiteralValue) -> Expr {
    match lv {
        LiteralValue::I64(n) => lit(*n),
        LiteralValue::Str(s) => lit(s.as_str()),
    }
}
