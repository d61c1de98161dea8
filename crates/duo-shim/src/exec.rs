use crate::error::{Error, Result};
use duo_platform::command::Command;
use duo_platform::env::EnvMap;
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitStatus;

/// Run `target` with `args` and the current environment overlaid with
/// `envs`, sharing this process's standard streams. Returns the exit code
/// this process should terminate with.
pub fn exec<I, S>(target: &Path, args: I, envs: &EnvMap) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(target)
        .args(args)
        .envs(envs)
        .status()
        .map_err(|source| Error::LaunchFailed {
            target: target.to_path_buf(),
            source,
        })?;
    tracing::debug!(target = %target.display(), %status, "child exited");
    Ok(exit_code(status))
}

/// Map a child's exit status to our own exit code.
///
/// On Unix a child killed by signal `n` maps to `128 + n`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
