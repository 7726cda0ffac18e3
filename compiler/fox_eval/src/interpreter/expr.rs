//! Expression evaluation.

use fox_ir::{Expr, Literal};
use fox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{undefined_variable, EvalResult};
use crate::{evaluate_binary, Value};

impl<'ast> Interpreter<'ast> {
    /// Evaluate an expression in the current environment.
    ///
    /// Uses `ensure_sufficient_stack` since nested expressions and calls
    /// recurse through here.
    pub(super) fn eval_expr(&mut self, expr: &'ast Expr) -> EvalResult<'ast> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &'ast Expr) -> EvalResult<'ast> {
        match expr {
            Expr::Literal(Literal::Number(n)) => Ok(Value::Number(*n)),
            Expr::Literal(Literal::Str(s)) => Ok(Value::Str(s.clone())),
            Expr::Var(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(name)),
            // Left operand first, then right.
            Expr::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(evaluate_binary(left, right, *op))
            }
            Expr::Call { callee, args } => self.eval_call(callee, args),
        }
    }
}
