//! Lexer output: token kinds and owned tokens.

use std::fmt;

/// Token kind.
///
/// The keyword set is fixed; keywords are matched against whole identifier
/// text, so `tulisan` lexes as an identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Repeated reads past the end keep returning it.
    Eof,

    // Keywords
    /// `tulis` - print statement.
    Tulis,
    /// `biar` - variable declaration.
    Biar,
    /// `jika` - if statement.
    Jika,
    /// `maka` - separates an `if` condition from its block.
    Maka,
    /// `akhir` - closes an `if` or function block.
    Akhir,
    /// `fungsi` - function declaration.
    Fungsi,
    /// `kembali` - return statement.
    Kembali,
    /// `dan` - logical and.
    Dan,
    /// `atau` - logical or.
    Atau,

    // Literals
    /// `"..."`; the token text excludes the quotes.
    String,
    /// Decimal digit run.
    Number,
    Ident,

    // Operators & punctuation
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    /// Any character the lexer does not recognize.
    Unknown,
}

impl TokenKind {
    /// Human-readable name used in parser diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Tulis => "'tulis'",
            TokenKind::Biar => "'biar'",
            TokenKind::Jika => "'jika'",
            TokenKind::Maka => "'maka'",
            TokenKind::Akhir => "'akhir'",
            TokenKind::Fungsi => "'fungsi'",
            TokenKind::Kembali => "'kembali'",
            TokenKind::Dan => "'dan'",
            TokenKind::Atau => "'atau'",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::Eq => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::Unknown => "unknown character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single token with its owned text and starting line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token; `None` only for [`TokenKind::Eof`].
    pub text: Option<String>,
    /// 1-based line on which the token starts.
    pub line: u32,
}

impl Token {
    /// Create a token carrying text.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            line,
        }
    }

    /// Create the end-of-input sentinel.
    pub const fn eof(line: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            text: None,
            line,
        }
    }

    /// Token text, or `""` for end of input.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Consume the token and return its text.
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Describe the token for "found ..." diagnostics.
    ///
    /// Literals and identifiers include their text; keywords and
    /// punctuation use the kind's display name.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Ident => format!("identifier '{}'", self.text()),
            TokenKind::Number => format!("number {}", self.text()),
            TokenKind::String => format!("string \"{}\"", self.text()),
            TokenKind::Unknown => format!("unknown character '{}'", self.text()),
            kind => kind.display_name().to_string(),
        }
    }
}
