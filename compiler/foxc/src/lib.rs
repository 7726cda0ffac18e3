//! Fox driver: the source-to-output pipeline and the `fox` command handlers.
//!
//! The whole program is parsed before anything runs, so a parse error
//! anywhere means no program output at all.

pub mod commands;

use std::sync::Once;

use fox_eval::{Interpreter, RuntimeError, SharedPrintHandler};
use fox_parse::ParseError;
use tracing::debug;

/// What happened when a parsed program ran to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Runtime errors in the order they were reported.
    pub errors: Vec<RuntimeError>,
}

impl RunOutcome {
    /// Whether any statement was abandoned.
    pub fn has_runtime_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse `source`, then evaluate it with output going to `handler`.
///
/// Runtime errors do not stop the program; they are written to the
/// handler's error channel and returned in the outcome.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, handler: SharedPrintHandler) -> Result<RunOutcome, ParseError> {
    let program = fox_parse::parse(source)
        .inspect_err(|err| debug!(line = err.line(), "parse failed, nothing runs"))?;
    debug!(statements = program.statements.len(), "parsed");

    let mut interpreter = Interpreter::builder().print_handler(handler).build();
    interpreter.evaluate(&program);
    Ok(RunOutcome {
        errors: interpreter.take_errors(),
    })
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
