//! Install sources and the order in which they are tried.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPO_URL: &str = "https://github.com/ethnmcl/social-duo.git";
pub const DEFAULT_SUBDIRECTORY: &str = "social-duo";

/// Something pip can install the tool from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// A local project directory.
    Local(PathBuf),
    /// A package name on the configured index.
    Registry(String),
    /// A git repository whose root holds the project.
    Git(String),
    /// A git repository with the project in a subdirectory.
    GitSubdirectory { url: String, subdirectory: String },
}

impl InstallSource {
    /// The argument handed to `pip install`.
    pub fn target(&self) -> OsString {
        match self {
            InstallSource::Local(path) => path.as_os_str().to_os_string(),
            InstallSource::Registry(name) => OsString::from(name),
            InstallSource::Git(url) => OsString::from(format!("git+{url}")),
            InstallSource::GitSubdirectory { url, subdirectory } => {
                OsString::from(format!("git+{url}#subdirectory={subdirectory}"))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InstallSource::Local(_) => "local",
            InstallSource::Registry(_) => "registry",
            InstallSource::Git(_) => "git",
            InstallSource::GitSubdirectory { .. } => "git-subdirectory",
        }
    }
}

impl fmt::Display for InstallSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target().to_string_lossy())
    }
}

/// Where the tool may be installed from.
///
/// Sources are tried as: local directory, registry package, git repository,
/// git repository subdirectory. Local and registry only take part when
/// configured; the subdirectory fallback only when a subdirectory is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    local: Option<PathBuf>,
    package: Option<String>,
    repo_url: String,
    subdirectory: Option<String>,
}

impl Default for InstallPlan {
    fn default() -> Self {
        Self {
            local: None,
            package: None,
            repo_url: DEFAULT_REPO_URL.to_string(),
            subdirectory: Some(DEFAULT_SUBDIRECTORY.to_string()),
        }
    }
}

impl InstallPlan {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            ..Self::default()
        }
    }

    pub fn local(mut self, dir: Option<PathBuf>) -> Self {
        self.local = dir;
        self
    }

    pub fn package(mut self, name: Option<String>) -> Self {
        self.package = name.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn subdirectory(mut self, subdirectory: Option<String>) -> Self {
        self.subdirectory = subdirectory.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn sources(&self) -> Vec<InstallSource> {
        let mut sources = Vec::with_capacity(4);

        if let Some(dir) = &self.local {
            if is_python_project(dir) {
                sources.push(InstallSource::Local(dir.clone()));
            } else {
                tracing::warn!(dir = %dir.display(), "local source has no pyproject.toml or setup.py, skipping");
            }
        }
        if let Some(name) = &self.package {
            sources.push(InstallSource::Registry(name.clone()));
        }
        sources.push(InstallSource::Git(self.repo_url.clone()));
        if let Some(subdirectory) = &self.subdirectory {
            sources.push(InstallSource::GitSubdirectory {
                url: self.repo_url.clone(),
                subdirectory: subdirectory.clone(),
            });
        }

        sources
    }
}

/// Whether `dir` looks like an installable Python project.
pub fn is_python_project(dir: &Path) -> bool {
    dir.join("pyproject.toml").is_file() || dir.join("setup.py").is_file()
}
