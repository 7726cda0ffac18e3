//! Lexer for Fox using logos.
//!
//! [`Lexer`] is pulled on demand by the parser: [`Lexer::next_token`]
//! consumes a token and [`Lexer::peek`] buffers exactly one token of
//! lookahead. [`tokenize`] collects a whole source for tooling and tests.
//!
//! Scanning never fails. Characters outside the language become
//! [`TokenKind::Unknown`] tokens and the lexer moves past them; an
//! unterminated string silently runs to end of input.

mod raw_token;

use fox_ir::{Token, TokenKind};
use logos::Logos;

use raw_token::RawToken;

/// Pull-based tokenizer with one token of lookahead.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    /// Line of the next unread character (1-based).
    line: u32,
    peeked: Option<Token>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            line: 1,
            peeked: None,
        }
    }

    /// Consume and return the next token.
    ///
    /// Past the end of input this keeps returning [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Repeated peeks return the buffered token without re-scanning.
    pub fn peek(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        };
        self.peeked.insert(token)
    }

    /// Kind of the next token.
    #[inline]
    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Scan one token from the raw stream.
    fn scan(&mut self) -> Token {
        while let Some(result) = self.raw.next() {
            let line = self.line;
            let slice = self.raw.slice();
            let kind = match result {
                Ok(RawToken::Newline) => {
                    self.line = self.line.saturating_add(1);
                    continue;
                }
                Ok(RawToken::String) => {
                    self.line = self.line.saturating_add(count_newlines(slice));
                    return Token::new(TokenKind::String, string_content(slice), line);
                }
                Ok(raw) => raw.kind(),
                Err(()) => TokenKind::Unknown,
            };
            return Token::new(kind, slice, line);
        }
        Token::eof(self.line)
    }
}

/// Lex a whole source into a token vector ending with a single `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let at_end = token.is_eof();
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

/// Strip the opening quote and, when present, the closing quote.
fn string_content(slice: &str) -> &str {
    let body = slice.strip_prefix('"').unwrap_or(slice);
    body.strip_suffix('"').unwrap_or(body)
}

fn count_newlines(slice: &str) -> u32 {
    let count = slice.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
