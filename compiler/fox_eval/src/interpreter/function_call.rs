//! Function call evaluation methods for the Interpreter.

use fox_ir::Expr;

use super::{Flow, Interpreter};
use crate::errors::{
    call_depth_exceeded, not_callable, undefined_function, EvalError, EvalResult,
};
use crate::Value;

impl<'ast> Interpreter<'ast> {
    /// Evaluate a call to a named function.
    ///
    /// The body runs in a fresh scope parented at the global scope, not at
    /// the caller's scope. Parameters bind positionally; extra arguments
    /// are evaluated and dropped, missing ones leave the parameter unbound.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub(super) fn eval_call(&mut self, callee: &str, args: &'ast [Expr]) -> EvalResult<'ast> {
        let func = match self.env.lookup(callee) {
            Some(Value::Function(func)) => func,
            Some(other) => return Err(not_callable(callee, &other)),
            None => return Err(undefined_function(callee)),
        };

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        self.check_call_depth(callee)?;

        let mut call_env = self.env.child();
        call_env.push_scope();
        for (param, value) in func.params.iter().zip(values) {
            call_env.define(param.as_str(), value);
        }

        let caller_env = std::mem::replace(&mut self.env, call_env);
        self.call_depth += 1;
        let flow = self.exec_block(&func.body.statements);
        self.call_depth -= 1;
        self.env = caller_env;

        Ok(match flow {
            Flow::Return(value) => value,
            Flow::Normal => Value::Null,
        })
    }

    fn check_call_depth(&self, callee: &str) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(call_depth_exceeded(callee, self.max_call_depth));
        }
        Ok(())
    }
}
