pub use error::{Error, Result};

pub mod command;
pub mod dir;
pub mod env;
mod error;
pub mod path;
