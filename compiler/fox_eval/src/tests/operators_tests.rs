//! Tests for binary operator implementations.

use crate::operators::evaluate_binary;
use crate::Value;
use fox_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn num(n: i64) -> Value<'static> {
    Value::Number(n)
}

#[test]
fn test_number_arithmetic() {
    assert_eq!(evaluate_binary(num(2), num(3), BinaryOp::Add), num(5));
    assert_eq!(evaluate_binary(num(5), num(3), BinaryOp::Sub), num(2));
    assert_eq!(evaluate_binary(num(2), num(3), BinaryOp::Mul), num(6));
    assert_eq!(evaluate_binary(num(7), num(2), BinaryOp::Div), num(3));
    assert_eq!(evaluate_binary(num(-7), num(2), BinaryOp::Div), num(-3));
}

#[test]
fn test_division_by_zero_is_zero() {
    assert_eq!(evaluate_binary(num(5), num(0), BinaryOp::Div), num(0));
    assert_eq!(evaluate_binary(num(0), num(0), BinaryOp::Div), num(0));
}

#[test]
fn test_arithmetic_wraps_on_overflow() {
    assert_eq!(
        evaluate_binary(num(i64::MAX), num(1), BinaryOp::Add),
        num(i64::MIN)
    );
    assert_eq!(
        evaluate_binary(num(i64::MIN), num(1), BinaryOp::Sub),
        num(i64::MAX)
    );
    assert_eq!(
        evaluate_binary(num(i64::MIN), num(-1), BinaryOp::Div),
        num(i64::MIN)
    );
}

#[test]
fn test_comparisons_yield_one_or_zero() {
    assert_eq!(evaluate_binary(num(2), num(3), BinaryOp::Lt), num(1));
    assert_eq!(evaluate_binary(num(3), num(2), BinaryOp::Lt), num(0));
    assert_eq!(evaluate_binary(num(3), num(2), BinaryOp::Gt), num(1));
    assert_eq!(evaluate_binary(num(2), num(2), BinaryOp::LtEq), num(1));
    assert_eq!(evaluate_binary(num(1), num(2), BinaryOp::GtEq), num(0));
    assert_eq!(evaluate_binary(num(2), num(2), BinaryOp::Eq), num(1));
    assert_eq!(evaluate_binary(num(2), num(2), BinaryOp::NotEq), num(0));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        evaluate_binary(Value::string("foo"), Value::string("bar"), BinaryOp::Add),
        Value::string("foobar")
    );
}

#[test]
fn test_mismatched_operands_yield_null() {
    assert_eq!(
        evaluate_binary(Value::string("a"), num(1), BinaryOp::Add),
        Value::Null
    );
    assert_eq!(
        evaluate_binary(num(1), Value::string("a"), BinaryOp::Add),
        Value::Null
    );
    assert_eq!(evaluate_binary(num(1), Value::Null, BinaryOp::Mul), Value::Null);
}

#[test]
fn test_strings_support_only_concatenation() {
    for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Eq, BinaryOp::Lt] {
        assert_eq!(
            evaluate_binary(Value::string("a"), Value::string("a"), op),
            Value::Null,
            "{op}"
        );
    }
}

#[test]
fn test_logical_operators_use_truthiness() {
    assert_eq!(evaluate_binary(num(2), num(3), BinaryOp::And), num(1));
    assert_eq!(evaluate_binary(num(2), num(0), BinaryOp::And), num(0));
    assert_eq!(evaluate_binary(num(0), num(0), BinaryOp::Or), num(0));
    assert_eq!(evaluate_binary(num(0), num(5), BinaryOp::Or), num(1));
    assert_eq!(
        evaluate_binary(Value::string(""), num(1), BinaryOp::And),
        num(1)
    );
    assert_eq!(evaluate_binary(Value::Null, num(1), BinaryOp::And), num(0));
    assert_eq!(evaluate_binary(Value::Null, num(1), BinaryOp::Or), num(1));
}

#[test]
fn test_logical_operators_agree_across_operand_types() {
    let values = [
        num(-1),
        num(0),
        num(7),
        Value::string(""),
        Value::Null,
    ];
    for left in &values {
        for right in &values {
            let both = left.is_truthy() && right.is_truthy();
            let either = left.is_truthy() || right.is_truthy();
            assert_eq!(
                evaluate_binary(left.clone(), right.clone(), BinaryOp::And),
                Value::from_bool(both),
                "{left} dan {right}"
            );
            assert_eq!(
                evaluate_binary(left.clone(), right.clone(), BinaryOp::Or),
                Value::from_bool(either),
                "{left} atau {right}"
            );
        }
    }
}
