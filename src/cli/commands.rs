//! CLI command implementations
//!
//! `serve` boots the HTTP server over a freshly seeded store; `seed-dump`
//! prints the fixture snapshot for use as static test data.

use std::fs;
use std::path::PathBuf;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::fixture_state;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(config, port),
        Command::SeedDump => seed_dump(),
    }
}

fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn seed_dump() -> CliResult<()> {
    let state = fixture_state();
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Load configuration, defaulting every field when no file is given.
fn load_config(path: Option<PathBuf>) -> CliResult<HttpServerConfig> {
    let Some(path) = path else {
        return Ok(HttpServerConfig::default());
    };
    let raw = fs::read_to_string(&path)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.port, 3789);
    }

    #[test]
    fn test_load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"host\": \"0.0.0.0\", \"port\": 9000}}").unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_load_config_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
