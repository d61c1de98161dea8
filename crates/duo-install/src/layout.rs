use duo_platform::path::exe_in;
use std::path::{Path, PathBuf};

/// Filesystem layout under the launcher's base directory.
///
/// ```text
/// <root>/
///   .env              optional overrides
///   venv/
///     bin/ | Scripts/ pip, python, <tool>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    venv: PathBuf,
    bin: PathBuf,
    tool: String,
}

impl Layout {
    pub const VENV_DIR: &'static str = "venv";
    pub const ENV_FILE: &'static str = ".env";

    pub fn new(root: impl Into<PathBuf>, tool: impl Into<String>) -> Self {
        let root = root.into();
        let venv = root.join(Self::VENV_DIR);
        let bin = if cfg!(target_os = "windows") {
            venv.join("Scripts")
        } else {
            venv.join("bin")
        };
        Self {
            root,
            venv,
            bin,
            tool: tool.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn venv_dir(&self) -> &Path {
        &self.venv
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn pip(&self) -> PathBuf {
        exe_in(&self.bin, "pip")
    }

    pub fn executable(&self) -> PathBuf {
        exe_in(&self.bin, &self.tool)
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(Self::ENV_FILE)
    }
}
