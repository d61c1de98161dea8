//! Interpreter discovery.

use crate::effects::{CommandRunner, Invocation, Outcome};
use crate::error::{Error, Result};

/// Oldest Python the tool supports; named in diagnostics.
pub const MINIMUM_PYTHON: &str = "3.11";

/// Commands probed for a usable interpreter, in order.
pub fn default_candidates() -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec!["python".to_string()]
    } else {
        vec!["python3".to_string(), "python".to_string()]
    }
}

/// Return the first candidate whose `--version` check succeeds.
pub fn probe<R: CommandRunner>(runner: &R, candidates: &[String]) -> Result<String> {
    for candidate in candidates {
        let check = Invocation::new(candidate).arg("--version").quiet();
        match runner.run(&check) {
            Ok(Outcome::Success) => {
                tracing::debug!(%candidate, "found interpreter");
                return Ok(candidate.clone());
            }
            Ok(outcome) => tracing::debug!(%candidate, %outcome, "version check failed"),
            Err(e) => tracing::debug!(%candidate, error = %e, "not runnable"),
        }
    }
    Err(Error::InterpreterNotFound {
        candidates: candidates.to_vec(),
        minimum: MINIMUM_PYTHON,
    })
}
