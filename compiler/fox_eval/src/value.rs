//! Runtime values.

use std::fmt;

use fox_ir::Function;

/// A runtime value.
///
/// `'ast` is the lifetime of the parsed program. Function values borrow
/// their declaration from it, so the program must outlive every value and
/// environment built while evaluating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'ast> {
    Number(i64),
    Str(String),
    Function(&'ast Function),
    /// Result of a call that did not return, or of an operator applied to
    /// operands it does not support.
    Null,
}

impl<'ast> Value<'ast> {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Numbers stand in for booleans: `1` for true, `0` for false.
    pub fn from_bool(b: bool) -> Self {
        Value::Number(i64::from(b))
    }

    /// Branch decision for `jika` and the logical operators.
    ///
    /// Numbers are true when nonzero, strings and functions are always
    /// true, null is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0,
            Value::Str(_) | Value::Function(_) => true,
            Value::Null => false,
        }
    }

    /// Name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::Null => "null",
        }
    }

    /// Text written by `tulis`, or `None` when the value prints nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(n.to_string()),
            Value::Str(s) => Some(s.clone()),
            Value::Function(_) | Value::Null => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => write!(f, "<fungsi {}>", func.name),
            Value::Null => f.write_str("null"),
        }
    }
}
