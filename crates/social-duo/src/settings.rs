//! Launcher settings.
//!
//! Layered, later layers winning:
//!
//! 1. built-in defaults;
//! 2. `<base>/launcher.toml`;
//! 3. `SOCIAL_DUO_REPO_URL`, `SOCIAL_DUO_SUBDIRECTORY`, `SOCIAL_DUO_LOCAL_PATH`,
//!    `SOCIAL_DUO_PACKAGE`, `SOCIAL_DUO_PYTHON`.

use duo_install::source::{DEFAULT_REPO_URL, DEFAULT_SUBDIRECTORY};
use duo_install::{InstallPlan, default_candidates};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Git repository of the Python project.
    pub repo_url: String,
    /// Project subdirectory inside the repository, tried after the root.
    pub subdirectory: Option<String>,
    /// Local project directory, tried first.
    pub local_path: Option<PathBuf>,
    /// Package name on the index, tried before git.
    pub package: Option<String>,
    /// Interpreter to use instead of probing.
    pub python: Option<String>,
    pub python_candidates: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            subdirectory: Some(DEFAULT_SUBDIRECTORY.to_string()),
            local_path: None,
            package: None,
            python: None,
            python_candidates: default_candidates(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "launcher.toml";
    pub const ENV_PREFIX: &'static str = "SOCIAL_DUO_";
    const ENV_KEYS: &'static [&'static str] = &["repo_url", "subdirectory", "local_path", "package", "python"];

    pub fn figment(root: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(root.join(Self::FILE_NAME)))
            .merge(Env::prefixed(Self::ENV_PREFIX).only(Self::ENV_KEYS))
    }

    pub fn load(root: &Path) -> Result<Self, figment::Error> {
        Self::figment(root).extract()
    }

    pub fn plan(&self) -> InstallPlan {
        InstallPlan::new(&self.repo_url)
            .subdirectory(self.subdirectory.clone())
            .local(self.local_path.clone())
            .package(self.package.clone())
    }

    /// Interpreter commands to probe: the forced one, or the candidate list.
    pub fn candidates(&self) -> Vec<String> {
        match &self.python {
            Some(python) if !python.trim().is_empty() => vec![python.clone()],
            _ => self.python_candidates.clone(),
        }
    }
}
