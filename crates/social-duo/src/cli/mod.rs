use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Parser)]
#[command(
    name = "social-duo-install",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create or upgrade the private Python environment that runs social-duo",
    long_about = None
)]
pub struct InstallArgs {
    /// Install from a local project directory before trying remote sources
    #[arg(long, value_name = "DIR")]
    pub local: Option<PathBuf>,

    /// Try this package on the package index before git
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Interpreter used to create the environment, instead of probing python3/python
    #[arg(long, value_name = "CMD")]
    pub python: Option<String>,
}

impl InstallArgs {
    /// Flags take precedence over settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(local) = &self.local {
            settings.local_path = Some(local.clone());
        }
        if let Some(package) = &self.package {
            settings.package = Some(package.clone());
        }
        if let Some(python) = &self.python {
            settings.python = Some(python.clone());
        }
    }
}
