//! Error types for dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a [`Provision`](crate::Provision) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("installation of {command} failed: {source}")]
    ProvisionFailed { command: String, source: BoxError },

    #[error("failed to launch {}: {source}", target.display())]
    LaunchFailed {
        target: PathBuf,
        source: duo_platform::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
