//! The `run` command: parse and evaluate a Fox source file.

use fox_eval::stdout_handler;
use tracing::debug;

use super::{read_file, CommandError};
use crate::{run_source, RunOutcome};

/// Run a Fox source file, printing to stdout and stderr.
///
/// A parse error is returned before anything is printed. Runtime errors
/// are already reported by the time this returns; they are not failures.
pub fn run_file(path: &str) -> Result<RunOutcome, CommandError> {
    let source = read_file(path)?;
    let outcome = run_source(&source, stdout_handler())?;
    if outcome.has_runtime_errors() {
        debug!(path, errors = outcome.errors.len(), "finished with runtime errors");
    }
    Ok(outcome)
}
