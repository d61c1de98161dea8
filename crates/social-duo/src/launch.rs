//! Entry points behind the two binaries.

use crate::TOOL_EXECUTABLE;
use crate::cli::InstallArgs;
use crate::env::DuoEnv;
use crate::settings::Settings;
use anyhow::{Context, Result};
use duo_install::Provisioned;
use duo_shim::{BinDirResolver, BoxError, Dispatcher};
use std::ffi::OsStr;

/// Run the installed tool with `args`, provisioning it first if needed.
/// Returns the exit code to terminate with.
pub fn dispatch<I, S>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let env = DuoEnv::new()?;
    let provision = || -> Result<(), BoxError> {
        let settings = Settings::load(env.root())?;
        env.provisioner(&settings).run()?;
        Ok(())
    };

    let [base_env, cwd_env] = env.env_files();
    let dispatcher = Dispatcher::new(
        TOOL_EXECUTABLE,
        BinDirResolver::new(env.layout().bin_dir()),
        provision,
    )
    .env_file(base_env)
    .env_file(cwd_env);

    Ok(dispatcher.dispatch(args)?)
}

/// Create or upgrade the environment and install the tool into it.
pub fn install(args: &InstallArgs) -> Result<Provisioned> {
    let env = DuoEnv::new()?;
    let mut settings = Settings::load(env.root()).with_context(|| {
        format!(
            "Failed to load {}",
            env.root().join(Settings::FILE_NAME).display()
        )
    })?;
    args.apply(&mut settings);
    tracing::debug!(?settings, root = %env.root().display(), "provisioning");

    Ok(env.provisioner(&settings).run()?)
}
