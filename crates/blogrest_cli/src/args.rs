//! CLI argument definitions using clap
//!
//! Commands:
//! - blogrest serve [--config <path>] [--host] [--port] [--database] [--log-level] [--log-dir]
//! - blogrest version

use blogrest_api::ServerConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// blogrest - CRUD HTTP API for blog posts and users over SQLite
#[derive(Parser, Debug)]
#[command(name = "blogrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the core crate version
    Version,
}

/// Flags for `serve`. Anything set here wins over the config file.
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "BLOGREST_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "BLOGREST_DATABASE")]
    pub database: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<String>,
}

impl ServeArgs {
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.log_dir.is_some() {
            config.log_dir = self.log_dir;
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
