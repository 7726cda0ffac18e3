//! Evaluator tests that span several modules.

mod control_tests;
mod operators_tests;
