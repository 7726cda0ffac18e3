//! Parse error types.
//!
//! The grammar has no recovery points: the first violation ends parsing and
//! no partial AST is produced. Every variant carries the line of the
//! offending token.

use fox_ir::Token;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token was required.
    #[error("line {line}: expected {expected}, found {found}")]
    Expected {
        line: u32,
        expected: &'static str,
        found: String,
    },

    /// The token in expression position cannot start an expression.
    #[error("line {line}: expected an expression, found {found}")]
    ExpectedExpression { line: u32, found: String },

    /// Integer literal does not fit in a 64-bit signed number.
    #[error("line {line}: number literal {literal} is too large")]
    NumberTooLarge { line: u32, literal: String },
}

impl ParseError {
    pub(crate) fn expected(expected: &'static str, found: &Token) -> Self {
        ParseError::Expected {
            line: found.line,
            expected,
            found: found.describe(),
        }
    }

    pub(crate) fn expected_expression(found: &Token) -> Self {
        ParseError::ExpectedExpression {
            line: found.line,
            found: found.describe(),
        }
    }

    /// Source line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Expected { line, .. }
            | ParseError::ExpectedExpression { line, .. }
            | ParseError::NumberTooLarge { line, .. } => *line,
        }
    }
}
