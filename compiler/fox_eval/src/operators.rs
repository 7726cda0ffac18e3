//! Binary operator implementations for the evaluator.
//!
//! Operators never fail. Operand combinations without a meaning yield
//! `Null`, which prints nothing and is falsy.

use fox_ir::BinaryOp;

use crate::Value;

/// Evaluate a binary operation on already-evaluated operands.
pub fn evaluate_binary<'ast>(left: Value<'ast>, right: Value<'ast>, op: BinaryOp) -> Value<'ast> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(a, b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Value::Str(a + &b),
        (left, right) => match op {
            BinaryOp::And => Value::from_bool(left.is_truthy() && right.is_truthy()),
            BinaryOp::Or => Value::from_bool(left.is_truthy() || right.is_truthy()),
            _ => Value::Null,
        },
    }
}

/// Binary operations on numbers.
///
/// Arithmetic wraps on overflow; dividing by zero gives zero. A number is
/// true when nonzero, the same rule `Value::is_truthy` applies.
fn eval_number_binary<'ast>(a: i64, b: i64, op: BinaryOp) -> Value<'ast> {
    match op {
        BinaryOp::Add => Value::Number(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Number(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Number(a.wrapping_mul(b)),
        BinaryOp::Div if b == 0 => Value::Number(0),
        BinaryOp::Div => Value::Number(a.wrapping_div(b)),
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::LtEq => Value::from_bool(a <= b),
        BinaryOp::GtEq => Value::from_bool(a >= b),
        BinaryOp::And => Value::from_bool(a != 0 && b != 0),
        BinaryOp::Or => Value::from_bool(a != 0 || b != 0),
    }
}
