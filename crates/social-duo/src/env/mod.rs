use crate::settings::Settings;
use crate::{BASE_DIR_NAME, HOME_ENV, TOOL_EXECUTABLE};
use anyhow::{Context, Result};
use duo_install::{Layout, Provisioner};
use duo_platform::dir::app_root;
use std::{
    env,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct DuoEnv {
    pwd: PathBuf,
    layout: Layout,
}

impl DuoEnv {
    pub fn new() -> Result<Self> {
        let root = app_root(HOME_ENV, BASE_DIR_NAME).context("Failed to get home directory")?;
        let pwd = env::current_dir().context("Failed to get current directory")?;
        Ok(Self::at(root, pwd))
    }

    pub fn at(root: impl Into<PathBuf>, pwd: impl Into<PathBuf>) -> Self {
        Self {
            pwd: pwd.into(),
            layout: Layout::new(root, TOOL_EXECUTABLE),
        }
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// `.env` files in ascending priority: base directory, then working directory.
    pub fn env_files(&self) -> [PathBuf; 2] {
        [self.layout.env_file(), self.pwd.join(Layout::ENV_FILE)]
    }

    pub fn provisioner(&self, settings: &Settings) -> Provisioner {
        Provisioner::new(self.layout.clone(), settings.plan()).candidates(settings.candidates())
    }
}
