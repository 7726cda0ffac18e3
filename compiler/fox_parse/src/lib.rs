//! Recursive descent parser for Fox.
//!
//! The parser pulls tokens from a [`Lexer`] on demand and builds the whole
//! [`Program`] before returning. It performs no semantic checks: unknown
//! names, arity mismatches and type errors are all runtime concerns.
//!
//! Errors are returned, not printed; the driver decides whether a
//! [`ParseError`] ends the process.

mod error;
mod grammar;

pub use error::ParseError;

use fox_ir::{Program, Token, TokenKind};
use fox_lexer::Lexer;
use tracing::trace;

/// Parser state.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a parser over `source`.
    pub fn new(source: &'src str) -> Self {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    /// Parse the entire token stream into a program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        trace!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements))
    }

    #[inline]
    fn current_kind(&mut self) -> TokenKind {
        self.lexer.peek_kind()
    }

    #[inline]
    fn current_line(&mut self) -> u32 {
        self.lexer.peek().line
    }

    #[inline]
    fn check(&mut self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    fn advance(&mut self) -> Token {
        let token = self.lexer.next_token();
        trace!(kind = ?token.kind, line = token.line, "advance");
        token
    }

    /// Consume a token of `kind`, or fail describing what was found.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::expected(expected, &token))
        }
    }
}

/// Parse a complete source text.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests;
