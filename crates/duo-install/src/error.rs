//! Error types for provisioning.

use crate::source::InstallSource;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Python {minimum}+ is required but was not found in PATH (tried {})", candidates.join(", "))]
    InterpreterNotFound {
        candidates: Vec<String>,
        minimum: &'static str,
    },

    #[error("failed to create virtual environment at {}: {reason}", path.display())]
    VenvFailed { path: PathBuf, reason: String },

    #[error("install failed after {} attempt(s)", attempts.len())]
    InstallFailed { attempts: Vec<FailedAttempt> },
}

/// One install source that was tried and did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    pub source: InstallSource,
    /// The command line that was run, for display.
    pub command: String,
    pub reason: String,
}
