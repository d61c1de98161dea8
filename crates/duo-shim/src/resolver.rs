//! Target resolution.
//!
//! A resolver maps a command name to the absolute path of an executable that
//! exists right now. `None` means "not installed".

use duo_platform::path::exe_in;
use std::path::PathBuf;

pub trait TargetResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

impl<R: TargetResolver + ?Sized> TargetResolver for &R {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        (**self).resolve(command)
    }
}

/// Resolves commands inside a single executable directory, such as the
/// `bin`/`Scripts` directory of a virtual environment.
#[derive(Debug, Clone)]
pub struct BinDirResolver {
    bin_dir: PathBuf,
}

impl BinDirResolver {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    /// Where `command` is expected to live, whether or not it exists.
    pub fn expected(&self, command: &str) -> PathBuf {
        exe_in(&self.bin_dir, command)
    }
}

impl TargetResolver for BinDirResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let target = self.expected(command);
        target.is_file().then_some(target)
    }
}
