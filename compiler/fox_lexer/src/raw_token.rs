//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before line
//! tracking and conversion to owned [`Token`](fox_ir::Token)s.

use fox_ir::TokenKind;
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")] // Skip whitespace other than newlines
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[token("tulis")]
    Tulis,
    #[token("biar")]
    Biar,
    #[token("jika")]
    Jika,
    #[token("maka")]
    Maka,
    #[token("akhir")]
    Akhir,
    #[token("fungsi")]
    Fungsi,
    #[token("kembali")]
    Kembali,
    #[token("dan")]
    Dan,
    #[token("atau")]
    Atau,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,

    /// Opening quote; the callback consumes through the closing quote or
    /// to end of input when the string is unterminated.
    #[token("\"", lex_string)]
    String,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume a string body after its opening quote.
fn lex_string(lex: &mut logos::Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(close) => lex.bump(close + 1),
        None => lex.bump(rest.len()),
    }
}

impl RawToken {
    /// Token kind for every raw token except `Newline`, which the lexer
    /// consumes for line tracking and never converts.
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Tulis => TokenKind::Tulis,
            RawToken::Biar => TokenKind::Biar,
            RawToken::Jika => TokenKind::Jika,
            RawToken::Maka => TokenKind::Maka,
            RawToken::Akhir => TokenKind::Akhir,
            RawToken::Fungsi => TokenKind::Fungsi,
            RawToken::Kembali => TokenKind::Kembali,
            RawToken::Dan => TokenKind::Dan,
            RawToken::Atau => TokenKind::Atau,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Eq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::String => TokenKind::String,
            RawToken::Number => TokenKind::Number,
            RawToken::Ident => TokenKind::Ident,
            // Filtered out by the lexer before conversion
            RawToken::Newline => TokenKind::Unknown,
        }
    }
}
