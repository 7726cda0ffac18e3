//! Whole-program evaluation: statements, scoping, calls and returns.

use crate::errors::{undefined_function, undefined_variable};
use crate::{buffer_handler, EvalError, Interpreter, RuntimeError};
use pretty_assertions::assert_eq;

struct Run {
    output: String,
    errors: String,
    reported: Vec<RuntimeError>,
}

fn run(source: &str) -> Run {
    let program = fox_parse::parse(source).expect("program should parse");
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    interpreter.evaluate(&program);
    Run {
        output: handler.get_output(),
        errors: handler.get_errors(),
        reported: interpreter.take_errors(),
    }
}

fn output(source: &str) -> String {
    let run = run(source);
    assert_eq!(run.reported, vec![], "unexpected runtime errors");
    run.output
}

#[test]
fn test_output_follows_statement_order() {
    assert_eq!(output("biar x = 1\ntulis x\nbiar y = 2\ntulis y"), "1\n2\n");
}

#[test]
fn test_print_strings_raw() {
    assert_eq!(output(r#"tulis "halo dunia""#), "halo dunia\n");
}

#[test]
fn test_precedence_end_to_end() {
    assert_eq!(output("tulis 2 + 3 * 4\ntulis (2 + 3) * 4"), "14\n20\n");
}

#[test]
fn test_string_concatenation_through_variable() {
    assert_eq!(output("biar a = \"foo\" + \"bar\"\ntulis a"), "foobar\n");
}

#[test]
fn test_type_mismatch_prints_nothing() {
    assert_eq!(output("tulis \"a\" + 1\ntulis 2"), "2\n");
}

#[test]
fn test_division_by_zero_prints_zero() {
    assert_eq!(output("tulis 5 / 0"), "0\n");
}

#[test]
fn test_redeclaration_overwrites() {
    assert_eq!(output("biar x = 1\nbiar x = \"dua\"\ntulis x"), "dua\n");
}

#[test]
fn test_if_runs_block_when_truthy() {
    assert_eq!(output("jika 1 maka tulis \"ya\" akhir"), "ya\n");
    assert_eq!(output("jika \"\" maka tulis \"ya\" akhir"), "ya\n");
}

#[test]
fn test_if_skips_block_when_falsy() {
    assert_eq!(output("jika 0 maka tulis \"ya\" akhir\ntulis 1"), "1\n");
    assert_eq!(output("jika \"a\" + 1 maka tulis \"ya\" akhir"), "");
}

#[test]
fn test_if_block_declarations_leak_out() {
    assert_eq!(output("jika 1 maka\n  biar z = 5\nakhir\ntulis z"), "5\n");
}

#[test]
fn test_logical_operators() {
    assert_eq!(
        output("tulis 1 < 2 dan 2 < 3\ntulis 0 atau 0\ntulis 0 atau 1 dan 1"),
        "1\n0\n1\n"
    );
}

#[test]
fn test_recursive_factorial() {
    let source = "\
fungsi fact(n)
  jika n < 2 maka
    kembali 1
  akhir
  kembali n * fact(n - 1)
akhir
tulis fact(5)";
    assert_eq!(output(source), "120\n");
}

#[test]
fn test_return_stops_function_body() {
    let source = "\
fungsi f()
  tulis \"sebelum\"
  kembali 1
  tulis \"sesudah\"
akhir
tulis f()";
    assert_eq!(output(source), "sebelum\n1\n");
}

#[test]
fn test_return_inside_if_unwinds_to_call() {
    let source = "\
fungsi tanda(n)
  jika n < 0 maka
    jika 1 maka
      kembali \"negatif\"
    akhir
  akhir
  kembali \"positif\"
akhir
tulis tanda(0 - 3)
tulis tanda(3)";
    assert_eq!(output(source), "negatif\npositif\n");
}

#[test]
fn test_function_without_return_yields_null() {
    assert_eq!(output("fungsi f() biar x = 1 akhir\ntulis f()\ntulis 2"), "2\n");
}

#[test]
fn test_call_scope_does_not_leak() {
    let run = run("fungsi f(a) biar b = a akhir\nf(1)\ntulis b\ntulis a");
    assert_eq!(run.output, "");
    assert_eq!(
        run.reported,
        vec![
            RuntimeError {
                line: 3,
                error: undefined_variable("b"),
            },
            RuntimeError {
                line: 4,
                error: undefined_variable("a"),
            },
        ]
    );
}

#[test]
fn test_function_sees_globals_not_caller_locals() {
    let source = "\
biar g = 10
fungsi baca() kembali g akhir
fungsi luar(g) kembali baca() akhir
tulis luar(99)";
    assert_eq!(output(source), "10\n");
}

#[test]
fn test_declarations_in_function_stay_local() {
    assert_eq!(
        output("biar x = 1\nfungsi f() biar x = 2 kembali x akhir\ntulis f()\ntulis x"),
        "2\n1\n"
    );
}

#[test]
fn test_extra_arguments_are_dropped() {
    assert_eq!(output("fungsi f(a) kembali a akhir\ntulis f(1, 2, 3)"), "1\n");
}

#[test]
fn test_missing_arguments_leave_parameters_unbound() {
    let run = run("fungsi f(a, b) kembali b akhir\ntulis f(1)\ntulis 7");
    assert_eq!(run.output, "7\n");
    assert_eq!(
        run.reported,
        vec![RuntimeError {
            line: 1,
            error: undefined_variable("b"),
        }]
    );
}

#[test]
fn test_arguments_evaluated_in_caller_scope() {
    assert_eq!(
        output("fungsi id(v) kembali v akhir\nbiar v = 4\ntulis id(v * 2)"),
        "8\n"
    );
}

#[test]
fn test_function_declared_later_is_not_hoisted() {
    let run = run("tulis f()\nfungsi f() kembali 1 akhir\ntulis f()");
    assert_eq!(run.output, "1\n");
    assert_eq!(
        run.reported,
        vec![RuntimeError {
            line: 1,
            error: undefined_function("f"),
        }]
    );
}

#[test]
fn test_undefined_variable_does_not_stop_program() {
    let run = run("tulis x\ntulis 1");
    assert_eq!(run.output, "1\n");
    assert_eq!(run.errors, "runtime error: line 1: undefined variable 'x'\n");
}

#[test]
fn test_undefined_function_does_not_stop_program() {
    let run = run("tulis 1\nhilang(2)\ntulis 3");
    assert_eq!(run.output, "1\n3\n");
    assert_eq!(
        run.reported,
        vec![RuntimeError {
            line: 2,
            error: undefined_function("hilang"),
        }]
    );
}

#[test]
fn test_calling_a_non_function() {
    let run = run("biar x = 1\nx()");
    assert_eq!(
        run.reported,
        vec![RuntimeError {
            line: 2,
            error: EvalError::NotCallable {
                name: "x".into(),
                type_name: "number",
            },
        }]
    );
}

#[test]
fn test_error_inside_if_reports_inner_line_and_continues_block() {
    let run = run("jika 1 maka\n  tulis y\n  tulis 2\nakhir\ntulis 3");
    assert_eq!(run.output, "2\n3\n");
    assert_eq!(run.reported[0].line, 2);
}

#[test]
fn test_top_level_return_stops_program() {
    let run = run("tulis 1\nkembali 0\ntulis 2");
    assert_eq!(run.output, "1\n");
    assert!(run.reported.is_empty());
}

#[test]
fn test_function_values_print_nothing() {
    assert_eq!(output("fungsi f() akhir\ntulis f\nbiar g = f\ntulis g()"), "");
}

#[test]
fn test_function_value_can_be_aliased() {
    assert_eq!(
        output("fungsi dua() kembali 2 akhir\nbiar d = dua\ntulis d()"),
        "2\n"
    );
}
