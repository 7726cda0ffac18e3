//! Grammar productions.
//!
//! - `stmt.rs`: statements and blocks
//! - `expr.rs`: binary precedence chain and primary expressions

mod expr;
mod stmt;
