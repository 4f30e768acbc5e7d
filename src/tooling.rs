//! Tooling: command-line front end and terminal formatting.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
