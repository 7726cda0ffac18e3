//! Command handlers for the `fox` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! `read_file` live here in the module root.

use std::io::ErrorKind;

use fox_parse::ParseError;
use thiserror::Error;

mod debug;
mod run;

pub use debug::{lex_file, parse_file, render_tokens};
pub use run::run_file;

/// Why a command could not finish.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read a source file, mapping I/O failures to user-facing errors.
pub fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_string();
        match e.kind() {
            ErrorKind::NotFound => CommandError::NotFound { path },
            ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Io { path, source: e },
        }
    })
}
