//! CLI argument definitions using clap
//!
//! Commands:
//! - madlab serve [--config <path>] [--host <host>] [--port <port>]
//! - madlab schema

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// madlab - record service for mad scientists and their devices
#[derive(Parser, Debug)]
#[command(name = "madlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service over an empty in-memory store
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the configuration file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the schema descriptor of every entity as JSON
    Schema,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let argv = ["madlab", "serve", "--port", "8080", "--host", "127.0.0.1"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_schema_command() {
        let cli = Cli::try_parse_from(["madlab", "schema"]).unwrap();
        assert!(matches!(cli.command, Command::Schema));
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Cli::try_parse_from(["madlab", "serve", "--port", "seventy"]).is_err());
    }
}
