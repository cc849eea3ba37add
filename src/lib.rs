#![warn(rust_2018_idioms)]

mod config;
mod driver;
mod errors;
mod location;
mod logger;
mod process;

#[cfg(test)]
mod testing;

pub use self::config::Config;
pub use self::driver::{ArtifactDriver, H3Driver};
pub use self::errors::{Error, ErrorKind, ResultExt};
pub use self::location::ArtifactLocation;
pub use self::logger::{Log, StdLog};
pub use self::process::{Capture, Invocation, Runner, SystemRunner};
