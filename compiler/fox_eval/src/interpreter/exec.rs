//! Statement execution.

use fox_ir::{Stmt, StmtKind};
use tracing::debug;

use super::{Flow, Interpreter};
use crate::errors::EvalError;
use crate::Value;

impl<'ast> Interpreter<'ast> {
    /// Run statements in order, stopping at the first `kembali`.
    ///
    /// A failing statement is reported and skipped; its siblings still run.
    pub(super) fn exec_block(&mut self, statements: &'ast [Stmt]) -> Flow<'ast> {
        for stmt in statements {
            match self.exec_stmt(stmt) {
                Ok(Flow::Normal) => {}
                Ok(flow @ Flow::Return(_)) => return flow,
                Err(error) => self.report(stmt.line, error),
            }
        }
        Flow::Normal
    }

    fn exec_stmt(&mut self, stmt: &'ast Stmt) -> Result<Flow<'ast>, EvalError> {
        match &stmt.kind {
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                match value.render() {
                    Some(text) => self.print_handler.println(&text),
                    None => debug!(line = stmt.line, kind = value.type_name(), "nothing to print"),
                }
            }
            StmtKind::VarDecl { name, init } => {
                let value = self.eval_expr(init)?;
                self.env.define(name.as_str(), value);
            }
            StmtKind::FuncDecl(func) => {
                self.env.define(func.name.as_str(), Value::Function(func));
            }
            // The then-block shares the enclosing scope.
            StmtKind::If { cond, then_block } => {
                if self.eval_expr(cond)?.is_truthy() {
                    return Ok(self.exec_block(&then_block.statements));
                }
            }
            StmtKind::Return(expr) => return Ok(Flow::Return(self.eval_expr(expr)?)),
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
            }
        }
        Ok(Flow::Normal)
    }
}
