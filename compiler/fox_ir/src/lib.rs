//! Fox IR - Token and syntax tree types.
//!
//! This crate contains the data shared by every stage of the Fox pipeline:
//! - `Token` / `TokenKind` produced by the lexer
//! - The AST (`Program`, `Block`, `Stmt`, `Expr`) produced by the parser
//!
//! # Ownership
//!
//! Every AST node owns its children and its leaf text. Statement sequences
//! are plain `Vec`s, so order is preserved and no node is shared. The whole
//! tree is built before evaluation starts and is only ever read afterwards.

pub mod ast;
mod token;

pub use ast::{BinaryOp, Block, Expr, Function, Literal, Program, Stmt, StmtKind};
pub use token::{Token, TokenKind};
