//! The dispatcher: find the tool, install it if it is missing, run it.

use crate::error::{Error, Result};
use crate::exec::exec;
use crate::provision::Provision;
use crate::resolver::TargetResolver;
use duo_platform::env::{EnvMap, EnvOverlay};
use std::ffi::OsStr;
use std::path::PathBuf;

pub struct Dispatcher<R, P> {
    command: String,
    resolver: R,
    provisioner: P,
    env_files: Vec<PathBuf>,
}

impl<R, P> Dispatcher<R, P>
where
    R: TargetResolver,
    P: Provision,
{
    pub fn new(command: impl Into<String>, resolver: R, provisioner: P) -> Self {
        Self {
            command: command.into(),
            resolver,
            provisioner,
            env_files: vec![],
        }
    }

    /// Add an environment file. Files added later override earlier ones.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_files.push(path.into());
        self
    }

    /// Resolve the target, provisioning it first if it is not installed.
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(target) = self.resolver.resolve(&self.command) {
            return Ok(target);
        }

        tracing::info!(command = %self.command, "not installed, provisioning");
        self.provisioner
            .provision()
            .map_err(|source| Error::ProvisionFailed {
                command: self.command.clone(),
                source,
            })?;

        self.resolver
            .resolve(&self.command)
            .ok_or_else(|| Error::NotInstalled(self.command.clone()))
    }

    /// Merged overrides from the configured env files. Read fresh on every call.
    pub fn environment(&self) -> EnvMap {
        self.env_files
            .iter()
            .fold(EnvOverlay::new(), |overlay, path| overlay.layer_file(path))
            .build()
    }

    /// Run the target with `args` unchanged and return its exit code.
    pub fn dispatch<I, S>(&self, args: I) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let target = self.locate()?;
        let envs = self.environment();
        tracing::debug!(target = %target.display(), overrides = envs.len(), "dispatching");
        exec(&target, args, &envs)
    }
}
