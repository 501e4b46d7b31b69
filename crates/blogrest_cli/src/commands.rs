//! Command dispatch.

use crate::args::{Cli, Command, ServeArgs};
use crate::errors::{CliError, CliResult};
use blogrest_api::{HttpServer, ServerConfig};
use log::info;

pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Version => {
            println!("blogrest {}", blogrest_core::core_version());
            Ok(())
        }
    }
}

/// Resolves the effective config: file (if any), then flags and env.
pub fn resolve_config(args: ServeArgs) -> CliResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };
    args.apply(&mut config);
    Ok(config)
}

/// Starts logging, opens the store and serves until the listener fails.
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    blogrest_core::init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(CliError::logging_error)?;

    let server = HttpServer::with_config(config)?;
    info!(
        "event=serve_begin module=cli status=ok addr={}",
        server.socket_addr()
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;
    Ok(())
}
