//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;

use fox_lexer::tokenize;

use super::{read_file, CommandError};

/// Render a source's token stream, one token per line.
pub fn render_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in tokenize(source) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:>4}  {}", token.line, token.describe());
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    print!("{}", render_tokens(&source));
    Ok(())
}

/// Parse a file and display its AST.
pub fn parse_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = fox_parse::parse(&source)?;
    println!("{program:#?}");
    Ok(())
}
