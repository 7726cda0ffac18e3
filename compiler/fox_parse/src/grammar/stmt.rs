//! Statement parsing.
//!
//! Statements are dispatched on their leading keyword. Anything else is an
//! expression statement, so a stray token surfaces as an "expected an
//! expression" error from the primary parser.

use fox_ir::{Block, Function, Stmt, StmtKind, TokenKind};
use fox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// Blocks nest through `jika` and `fungsi`, so this is the recursion
    /// point guarded by `ensure_sufficient_stack`.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let kind = match self.current_kind() {
            TokenKind::Tulis => {
                self.advance();
                StmtKind::Print(self.parse_expr()?)
            }
            TokenKind::Biar => self.parse_var_decl()?,
            TokenKind::Jika => self.parse_if()?,
            TokenKind::Fungsi => StmtKind::FuncDecl(self.parse_function()?),
            TokenKind::Kembali => {
                self.advance();
                StmtKind::Return(self.parse_expr()?)
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        Ok(Stmt::new(kind, line))
    }

    /// `biar IDENT = expr`
    fn parse_var_decl(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let name = self.expect(TokenKind::Ident, "variable name")?.into_text();
        self.expect(TokenKind::Eq, "'='")?;
        let init = self.parse_expr()?;
        Ok(StmtKind::VarDecl { name, init })
    }

    /// `jika expr maka block akhir`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Maka, "'maka'")?;
        let then_block = self.parse_block()?;
        self.expect(TokenKind::Akhir, "'akhir'")?;
        Ok(StmtKind::If { cond, then_block })
    }

    /// `fungsi IDENT ( [IDENT {, IDENT}] ) block akhir`
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.advance();
        let name = self.expect(TokenKind::Ident, "function name")?.into_text();
        self.expect(TokenKind::LParen, "'('")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.expect(TokenKind::Ident, "parameter name")?.into_text());
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.expect(TokenKind::RParen, "')'")?;

        let body = self.parse_block()?;
        self.expect(TokenKind::Akhir, "'akhir'")?;
        trace!(name = %name, params = params.len(), "parsed function");
        Ok(Function { name, params, body })
    }

    /// Statements up to (not including) `akhir` or end of input.
    ///
    /// `kembali` does not end a block; its early exit happens at runtime.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let mut statements = Vec::new();
        while !matches!(self.current_kind(), TokenKind::Akhir | TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        Ok(Block::new(statements))
    }
}
