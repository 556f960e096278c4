//! CLI argument definitions using clap
//!
//! Commands:
//! - planetd init --data-dir <path>
//! - planetd serve --data-dir <path> [--host <host>] [--port <port>] [--ephemeral]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// planetd - A small, self-hostable HTTP catalog service for planet records
#[derive(Parser, Debug)]
#[command(name = "planetd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new planetd data directory
    Init {
        /// Path to the data directory
        #[arg(long, default_value = "./planetd-data")]
        data_dir: PathBuf,
    },

    /// Start the planetd HTTP server
    Serve {
        /// Path to the data directory
        #[arg(long, default_value = "./planetd-data")]
        data_dir: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Use an in-memory store instead of the journal (no data dir needed)
        #[arg(long)]
        ephemeral: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
