//! Dispatch mechanism for the social-duo launcher.
//!
//! # Architecture
//!
//! The dispatcher maps a command name to an installed executable through a
//! [`TargetResolver`], asks a [`Provision`] implementation to install it when
//! it is missing, overlays environment files, and execs it. Where the
//! executable lives and how it gets installed are decided by the caller.
//!
//! # Example
//!
//! ```no_run
//! use duo_shim::{BinDirResolver, BoxError, Dispatcher};
//!
//! let provision = || -> Result<(), BoxError> { Err("run the installer first".into()) };
//! let dispatcher = Dispatcher::new("social_duo", BinDirResolver::new("/home/ada/.social-duo/venv/bin"), provision)
//!     .env_file("/home/ada/.social-duo/.env")
//!     .env_file(".env");
//!
//! let code = dispatcher.dispatch(std::env::args_os().skip(1))?;
//! std::process::exit(code);
//! # Ok::<(), duo_shim::Error>(())
//! ```

pub use dispatch::Dispatcher;
pub use error::{BoxError, Error, Result};
pub use exec::{exec, exit_code};
pub use provision::Provision;
pub use resolver::{BinDirResolver, TargetResolver};

mod dispatch;
mod error;
mod exec;
mod provision;
mod resolver;
