//! Tree-walking interpreter for Fox programs.
//!
//! The interpreter borrows the program for `'ast` and keeps an
//! [`Environment`] whose global scope lives for the whole run. Statements
//! report control flow through [`Flow`]; a `kembali` travels outward as
//! `Flow::Return` until the enclosing call turns it into the call's value.

mod builder;
mod exec;
mod expr;
mod function_call;

pub use builder::InterpreterBuilder;

use fox_ir::Program;
use tracing::debug;

use crate::errors::{EvalError, RuntimeError};
use crate::{Environment, SharedPrintHandler, Value};

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// How a statement or block finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow<'ast> {
    /// Continue with the next statement.
    Normal,
    /// A `kembali` ran; unwind to the enclosing call.
    Return(Value<'ast>),
}

/// Tree-walking interpreter.
pub struct Interpreter<'ast> {
    /// Current environment. Swapped for a call environment during calls.
    env: Environment<'ast>,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
    errors: Vec<RuntimeError>,
}

impl<'ast> Interpreter<'ast> {
    /// Create an interpreter printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Create a builder for configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Execute a program's top-level statements in order.
    ///
    /// Runtime errors abandon only the statement that raised them; they are
    /// reported on the error channel and collected in [`Self::errors`].
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn evaluate(&mut self, program: &'ast Program) {
        if let Flow::Return(value) = self.exec_block(&program.statements) {
            debug!(%value, "top-level return ends the program");
        }
    }

    /// Runtime errors reported so far, in order.
    pub fn errors(&self) -> &[RuntimeError] {
        &self.errors
    }

    /// Take the reported runtime errors, leaving none behind.
    pub fn take_errors(&mut self) -> Vec<RuntimeError> {
        std::mem::take(&mut self.errors)
    }

    /// Look up a name in the current environment.
    pub fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        self.env.lookup(name)
    }

    /// Report a runtime error raised by the statement on `line`.
    fn report(&mut self, line: u32, error: EvalError) {
        let error = RuntimeError { line, error };
        debug!(%error, "statement abandoned");
        self.print_handler.eprintln(&format!("runtime error: {error}"));
        self.errors.push(error);
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
