//! Per-user directory helpers.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// User's home directory.
pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Root directory of an application that keeps its state under the user's
/// home, e.g. `~/.social-duo`.
///
/// A non-empty `override_var` in the environment takes precedence.
pub fn app_root(override_var: &str, dir_name: &str) -> Option<PathBuf> {
    resolve_root(env::var_os(override_var), user_home(), dir_name)
}

fn resolve_root(
    overridden: Option<OsString>,
    home: Option<PathBuf>,
    dir_name: &str,
) -> Option<PathBuf> {
    match overridden {
        Some(root) if !root.is_empty() => Some(PathBuf::from(root)),
        _ => home.map(|h| h.join(dir_name)),
    }
}
