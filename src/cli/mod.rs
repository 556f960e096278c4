//! CLI module for planetd
//!
//! Provides the command-line interface:
//! - init: create a data directory with an empty journal
//! - serve: open the journal and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
