//! Synthetic Web Search MCP Server - Main Entry Point
//!
//! Runs the `search_web` MCP server on stdio. Configure it in an MCP host,
//! for example:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "synthetic-search": {
//!       "command": "synthetic-search-mcp",
//!       "env": { "SYNTHETIC_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use synthetic_search_mcp::config::{ConfigError, ServerConfig, DEFAULT_CONFIG_FILE, ENDPOINT_ENV};
use synthetic_search_mcp::observability::init_default_logging;
use synthetic_search_mcp::{build_server, lifecycle_span, transport, ServerError, ServerResult};
use tracing::{error, info};

/// MCP server exposing Synthetic web search
#[derive(Parser)]
#[command(name = "synthetic-search-mcp")]
#[command(about = "MCP server exposing Synthetic web search over stdio")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the search endpoint
    #[arg(long, value_name = "URL", env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the MCP protocol on stdin/stdout (default)
    Serve,
    /// Validate configuration and credential
    Config {
        /// Print the resolved configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    let config = match load_configuration(cli.config.as_deref(), cli.endpoint) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            exit_with(ServerError::from(e));
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Config { show } => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("{}", e);
        exit_with(e);
    }
}

/// Write the fatal diagnostic to stderr regardless of the log filter and exit
fn exit_with(error: ServerError) -> ! {
    eprintln!("{}", error.diagnostic());
    process::exit(1);
}

fn load_configuration(
    config_path: Option<&Path>,
    endpoint: Option<String>,
) -> Result<ServerConfig, ConfigError> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ServerConfig::load_from_file(path)?
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                info!("Loading configuration from: {}", default_path.display());
                ServerConfig::load_from_file(default_path)?
            } else {
                ServerConfig::default()
            }
        }
    };

    config.with_endpoint_override(endpoint)
}

async fn run_server(config: ServerConfig) -> ServerResult<()> {
    let server = {
        let _startup = lifecycle_span!(event = "startup").entered();

        // Missing credential ends the process before any tool is registered
        let credential = config.load_credential()?;

        info!(
            name = %config.server.name,
            version = env!("CARGO_PKG_VERSION"),
            endpoint = %config.search.endpoint,
            "Starting Synthetic Web Search MCP Server"
        );

        build_server(&config, credential)?
    };

    transport::run_stdio(server).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn handle_config_command(config: &ServerConfig, show: bool) -> ServerResult<()> {
    config.load_credential()?;

    if show {
        println!("{}", toml::to_string_pretty(config).map_err(ConfigError::from)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
