//! Fox Eval - tree-walking evaluator for Fox programs.
//!
//! # Architecture
//!
//! - `Value`: runtime values; functions borrow their declaration from the AST
//! - `Environment`: variable scoping with a scope stack over a shared global scope
//! - `evaluate_binary`: total binary operator dispatch
//! - `Interpreter`: statement execution with explicit `Flow`
//! - `PrintHandlerImpl`: where `tulis` output and runtime errors go

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalResult, RuntimeError};
pub use interpreter::{Flow, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
