//! Executable naming.

use std::path::{Path, PathBuf};

/// Suffix the platform appends to executables (`.exe` on Windows).
pub const EXE_SUFFIX: &str = std::env::consts::EXE_SUFFIX;

/// File name of the executable `stem` on this platform.
pub fn exe_name(stem: &str) -> String {
    format!("{stem}{EXE_SUFFIX}")
}

/// Path of the executable `stem` inside `dir`.
pub fn exe_in(dir: &Path, stem: &str) -> PathBuf {
    dir.join(exe_name(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exe_name_platform_suffix() {
        #[cfg(target_os = "windows")]
        assert_eq!(exe_name("social_duo"), "social_duo.exe");
        #[cfg(not(target_os = "windows"))]
        assert_eq!(exe_name("social_duo"), "social_duo");
    }

    #[test]
    fn test_exe_in_joins_dir() {
        let path = exe_in(Path::new("venv").join("bin").as_path(), "pip");
        assert_eq!(path.parent(), Some(Path::new("venv").join("bin").as_path()));
        assert_eq!(path.file_name().unwrap().to_string_lossy(), exe_name("pip"));
    }
}
