//! The provisioner: base directory, interpreter, venv, then install.

use crate::effects::{CommandRunner, Invocation, Outcome, SystemRunner};
use crate::error::{Error, FailedAttempt, Result};
use crate::interpreter::{default_candidates, probe};
use crate::layout::Layout;
use crate::source::{InstallPlan, InstallSource};
use std::fs;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub interpreter: String,
    pub created_venv: bool,
    pub source: InstallSource,
}

pub struct Provisioner<R = SystemRunner> {
    layout: Layout,
    plan: InstallPlan,
    candidates: Vec<String>,
    runner: R,
}

impl Provisioner<SystemRunner> {
    pub fn new(layout: Layout, plan: InstallPlan) -> Self {
        Self {
            layout,
            plan,
            candidates: default_candidates(),
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Provisioner<R> {
    /// Swap the process runner.
    pub fn runner<T: CommandRunner>(self, runner: T) -> Provisioner<T> {
        Provisioner {
            layout: self.layout,
            plan: self.plan,
            candidates: self.candidates,
            runner,
        }
    }

    /// Interpreter commands to probe, in order.
    pub fn candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn run(&self) -> Result<Provisioned> {
        let root = self.layout.root();
        fs::create_dir_all(root).map_err(|source| Error::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;

        let interpreter = probe(&self.runner, &self.candidates)?;

        let created_venv = !self.layout.venv_dir().exists();
        if created_venv {
            self.create_venv(&interpreter)?;
        }

        let source = self.install()?;
        tracing::info!(%source, "installed {}", self.layout.tool());

        Ok(Provisioned {
            interpreter,
            created_venv,
            source,
        })
    }

    fn create_venv(&self, interpreter: &str) -> Result<()> {
        let venv = self.layout.venv_dir();
        tracing::info!(path = %venv.display(), %interpreter, "creating virtual environment");

        let create = Invocation::new(interpreter).arg("-m").arg("venv").arg(venv);
        let reason = match self.runner.run(&create) {
            Ok(Outcome::Success) => return Ok(()),
            Ok(outcome) => format!("{create} {outcome}"),
            Err(e) => e.to_string(),
        };
        Err(Error::VenvFailed {
            path: venv.to_path_buf(),
            reason,
        })
    }

    /// Try each source in plan order; the first success wins.
    fn install(&self) -> Result<InstallSource> {
        let pip = self.layout.pip();
        let mut attempts = vec![];

        for source in self.plan.sources() {
            let install = Invocation::new(&pip)
                .arg("install")
                .arg("--upgrade")
                .arg(source.target());
            tracing::info!(kind = source.kind(), %source, "installing");

            let reason = match self.runner.run(&install) {
                Ok(Outcome::Success) => return Ok(source),
                Ok(outcome) => outcome.to_string(),
                Err(e) => e.to_string(),
            };
            tracing::info!(%source, %reason, "install attempt failed");
            attempts.push(FailedAttempt {
                source,
                command: install.to_string(),
                reason,
            });
        }

        Err(Error::InstallFailed { attempts })
    }
}
