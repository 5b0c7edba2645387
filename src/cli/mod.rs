//! CLI module for fakereg
//!
//! Provides the command-line interface:
//! - serve: boot the fake registry API server
//! - seed-dump: print the fixture snapshot as JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
