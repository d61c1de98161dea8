//! Process execution behind a trait, so provisioning can be driven by a
//! scripted runner in tests.

use duo_platform::command::Command;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Discard the child's standard streams.
    pub quiet: bool,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: vec![],
            quiet: false,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a child that did start finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit; `None` when terminated by a signal.
    Failed(Option<i32>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "succeeded"),
            Outcome::Failed(Some(code)) => write!(f, "exited with status {code}"),
            Outcome::Failed(None) => write!(f, "terminated by signal"),
        }
    }
}

pub trait CommandRunner {
    /// Run to completion. `Err` means the program could not be started.
    fn run(&self, invocation: &Invocation) -> duo_platform::Result<Outcome>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> duo_platform::Result<Outcome> {
        (**self).run(invocation)
    }
}

/// Runs real processes, inheriting standard streams unless the invocation is
/// quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> duo_platform::Result<Outcome> {
        let mut cmd = Command::new(&invocation.program).args(&invocation.args);
        if invocation.quiet {
            cmd = cmd.quiet();
        }
        let status = cmd.status()?;
        Ok(if status.success() {
            Outcome::Success
        } else {
            Outcome::Failed(status.code())
        })
    }
}
