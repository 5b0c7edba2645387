//! CLI argument definitions using clap
//!
//! Commands:
//! - fakereg serve [--config <path>] [--port <port>]
//! - fakereg seed-dump

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fakereg - A deterministic in-memory fake backend for a circuit-design
/// package registry
#[derive(Parser, Debug)]
#[command(name = "fakereg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the fake registry API server with a seeded store
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the fixture store snapshot as JSON and exit
    SeedDump,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
