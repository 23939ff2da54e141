//! CLI argument definitions using clap
//!
//! Commands:
//! - adboard init --config <path>
//! - adboard start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// adboard - a small, self-hostable advertisement record service
#[derive(Parser, Debug)]
#[command(name = "adboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and schema
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./adboard.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./adboard.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
