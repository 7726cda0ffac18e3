#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::call_depth_exceeded;
use crate::{buffer_handler, silent_handler};
use fox_ir::{Expr, Program, Stmt, StmtKind};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Program {
    fox_parse::parse(source).expect("program should parse")
}

#[test]
fn print_handler_integration_println() {
    let handler = buffer_handler();
    let program = Program::new(vec![Stmt::new(StmtKind::Print(Expr::number(7)), 1)]);

    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    interpreter.evaluate(&program);

    assert_eq!(handler.get_output(), "7\n");
}

#[test]
fn default_builder_uses_default_call_depth() {
    let interpreter = Interpreter::new();
    assert_eq!(interpreter.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(interpreter.env.depth(), 1);
}

#[test]
fn globals_visible_after_evaluation() {
    let program = parse("biar x = 2 * 21\nfungsi f() akhir");
    let mut interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    interpreter.evaluate(&program);

    assert_eq!(interpreter.lookup("x"), Some(Value::Number(42)));
    assert!(matches!(interpreter.lookup("f"), Some(Value::Function(f)) if f.name == "f"));
    assert_eq!(interpreter.lookup("y"), None);
}

#[test]
fn call_environment_restored_after_call() {
    let program = parse("fungsi f(a) biar b = a kembali b akhir\nbiar r = f(3)");
    let mut interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    interpreter.evaluate(&program);

    assert_eq!(interpreter.lookup("r"), Some(Value::Number(3)));
    assert_eq!(interpreter.lookup("b"), None);
    assert_eq!(interpreter.env.depth(), 1);
    assert_eq!(interpreter.call_depth, 0);
}

#[test]
fn unbounded_recursion_hits_call_depth_limit() {
    let program = parse("fungsi f(n) kembali f(n + 1) akhir\ntulis f(0)\ntulis \"lanjut\"");
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .max_call_depth(50)
        .build();
    interpreter.evaluate(&program);

    // Only the innermost frame fails; the frames above it see null.
    let errors = interpreter.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        RuntimeError {
            line: 1,
            error: call_depth_exceeded("f", 50),
        }
    );
    assert_eq!(handler.get_output(), "lanjut\n");
    assert_eq!(interpreter.call_depth, 0);
}

#[test]
fn recursion_within_limit_succeeds() {
    let source = "\
fungsi hitung(n)
  jika n < 1 maka
    kembali 0
  akhir
  kembali 1 + hitung(n - 1)
akhir
tulis hitung(500)";
    let program = parse(source);
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    interpreter.evaluate(&program);

    assert_eq!(handler.get_output(), "500\n");
    assert!(interpreter.errors().is_empty());
}

#[test]
fn errors_are_reported_and_collected() {
    let program = parse("tulis a\ntulis b");
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    interpreter.evaluate(&program);

    assert_eq!(interpreter.errors().len(), 2);
    assert_eq!(
        handler.get_errors(),
        "runtime error: line 1: undefined variable 'a'\n\
         runtime error: line 2: undefined variable 'b'\n"
    );

    let taken = interpreter.take_errors();
    assert_eq!(taken.len(), 2);
    assert!(interpreter.errors().is_empty());
}

#[test]
fn interpreter_can_run_several_programs() {
    let first = parse("biar x = 1");
    let second = parse("tulis x + 1");
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    interpreter.evaluate(&first);
    interpreter.evaluate(&second);

    assert_eq!(handler.get_output(), "2\n");
}
