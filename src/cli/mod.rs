//! CLI module for adboard
//!
//! Provides command-line interface for:
//! - init: create the database file and schema
//! - start: boot the store and serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliResult};
