pub mod cli;
pub mod env;
pub mod launch;
pub mod logging;
pub mod report;
pub mod settings;

/// Name users know the tool by.
pub const TOOL_NAME: &str = "social-duo";
/// Console script installed into the venv by the Python package.
pub const TOOL_EXECUTABLE: &str = "social_duo";
/// Base directory under the user's home.
pub const BASE_DIR_NAME: &str = ".social-duo";
/// Overrides the base directory.
pub const HOME_ENV: &str = "SOCIAL_DUO_HOME";
/// The provisioning entry point, named in remediation hints.
pub const INSTALL_COMMAND: &str = "social-duo-install";
