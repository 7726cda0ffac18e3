//! Abstract syntax tree.
//!
//! Statements and expressions are separate enums. Sequences (statements,
//! parameters, arguments) are owned `Vec`s whose order matches the source.

mod operators;

pub use operators::BinaryOp;

/// A whole source file: the top-level statement sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

/// Statements between a header (`maka`, parameter list) and `akhir`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// A statement and the line it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `biar name = init`
    ///
    /// Always binds in the current scope, even when an outer scope already
    /// has `name`.
    VarDecl { name: String, init: Expr },

    /// `tulis expr`
    Print(Expr),

    /// `jika cond maka ... akhir`
    If { cond: Expr, then_block: Block },

    /// `fungsi name(params) ... akhir`
    FuncDecl(Function),

    /// `kembali expr`
    Return(Expr),

    /// An expression evaluated for its side effects, usually a call.
    Expr(Expr),
}

/// Function declaration.
///
/// Runtime function values borrow this node, so the tree has to outlive
/// evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
}

/// Literal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Number(i64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),

    /// Variable access by name.
    Var(String),

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// `callee(args)`; the callee is always a plain name.
    Call { callee: String, args: Vec<Expr> },
}

impl Expr {
    /// Create a number literal.
    pub fn number(n: i64) -> Self {
        Self::Literal(Literal::Number(n))
    }

    /// Create a string literal.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Literal(Literal::Str(s.into()))
    }

    /// Create a variable access.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Create a binary expression.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a call expression.
    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: callee.into(),
            args,
        }
    }
}
