//! Runtime errors and their constructors.
//!
//! Constructors live here so every evaluation site builds errors the same
//! way: `Err(undefined_variable(name))`.

use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult<'ast> = Result<Value<'ast>, EvalError>;

/// An error that abandons the statement being executed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("undefined function '{name}'")]
    UndefinedFunction { name: String },

    #[error("'{name}' is a {type_name}, not a function")]
    NotCallable {
        name: String,
        type_name: &'static str,
    },

    #[error("maximum call depth of {limit} exceeded calling '{name}'")]
    CallDepthExceeded { name: String, limit: usize },
}

/// A runtime error tagged with the line of the statement it abandoned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("line {line}: {error}")]
pub struct RuntimeError {
    pub line: u32,
    #[source]
    pub error: EvalError,
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable { name: name.into() }
}

pub fn undefined_function(name: &str) -> EvalError {
    EvalError::UndefinedFunction { name: name.into() }
}

pub fn not_callable(name: &str, value: &Value<'_>) -> EvalError {
    EvalError::NotCallable {
        name: name.into(),
        type_name: value.type_name(),
    }
}

pub fn call_depth_exceeded(name: &str, limit: usize) -> EvalError {
    EvalError::CallDepthExceeded {
        name: name.into(),
        limit,
    }
}
