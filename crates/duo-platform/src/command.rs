use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::{Command as StdCommand, ExitStatus, Output, Stdio};

/// Thin builder over [`std::process::Command`] that remembers the program
/// name for error reporting.
///
/// Standard streams are inherited unless [`Command::quiet`] is called.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        let program = program.as_ref();
        Self {
            inner: StdCommand::new(program),
            program: program.to_string_lossy().into_owned(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.env(key, val);
        self
    }

    /// Overlay variables onto the inherited environment.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.envs(vars);
        self
    }

    /// Discard all standard streams. Used for probes whose output is noise.
    pub fn quiet(mut self) -> Self {
        self.inner
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self
    }

    /// Run to completion and return the exit status.
    pub fn status(&mut self) -> Result<ExitStatus> {
        tracing::debug!(cmd = %self.program, "running");
        self.inner
            .status()
            .map_err(|e| Error::spawn(&self.program, e))
    }

    pub fn output(&mut self) -> Result<Output> {
        tracing::debug!(cmd = %self.program, "capturing");
        self.inner
            .output()
            .map_err(|e| Error::spawn(&self.program, e))
    }
}
