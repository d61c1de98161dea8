//! Provisioning for the social-duo launcher.
//!
//! Ensures a private Python virtual environment exists under the launcher's
//! base directory and that the tool is installed into it:
//!
//! 1. create the base directory;
//! 2. probe for an interpreter (`python3`, `python`);
//! 3. create `<base>/venv` if it does not exist;
//! 4. `pip install --upgrade` from each [`InstallSource`] in order until one
//!    succeeds.
//!
//! Process execution goes through [`effects::CommandRunner`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use duo_install::{InstallPlan, Layout, Provisioner};
//!
//! let layout = Layout::new("/home/ada/.social-duo", "social_duo");
//! let done = Provisioner::new(layout, InstallPlan::default()).run()?;
//! println!("installed from {}", done.source);
//! # Ok::<(), duo_install::Error>(())
//! ```

pub mod effects;
pub mod error;
pub mod interpreter;
pub mod layout;
pub mod provision;
pub mod source;

#[cfg(test)]
mod testing;

pub use error::{Error, FailedAttempt, Result};
pub use interpreter::{MINIMUM_PYTHON, default_candidates};
pub use layout::Layout;
pub use provision::{Provisioned, Provisioner};
pub use source::{InstallPlan, InstallSource};
