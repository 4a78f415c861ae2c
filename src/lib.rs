//! Synthetic Search MCP
//!
//! An MCP server exposing a single `search_web` tool over stdio. Each call is
//! forwarded as one authenticated POST to the Synthetic search API and the
//! response's `results` field is returned as indented JSON text.
//!
//! # Overview
//!
//! - [`config`]: TOML settings and the credential loader
//! - [`tools`]: the tool trait, the immutable registry and the `search_web` builtin
//! - [`transport`]: the rmcp `ServerHandler` and stdio wiring
//! - [`observability`]: structured logging to stderr
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use synthetic_search_mcp::config::{Credential, DEFAULT_SEARCH_ENDPOINT};
//! use synthetic_search_mcp::tools::{builtin::SearchWebTool, ToolRegistry};
//! use synthetic_search_mcp::transport::{run_stdio, SearchServer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = Credential::from_env("SYNTHETIC_API_KEY")?;
//! let tool = SearchWebTool::new(credential, DEFAULT_SEARCH_ENDPOINT)?;
//! let registry = ToolRegistry::new(vec![Arc::new(tool)])?;
//!
//! run_stdio(SearchServer::new("synthetic-web-search-server", registry)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod tools;
pub mod transport;

pub use config::{ConfigError, Credential, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use tools::{Tool, ToolDescription, ToolError, ToolRegistry};
pub use transport::SearchServer;

use std::sync::Arc;
use tools::builtin::SearchWebTool;

/// Build the registry declared by this server: exactly one `search_web` tool
pub fn build_registry(
    config: &ServerConfig,
    credential: Credential,
) -> Result<ToolRegistry, ToolError> {
    let search = SearchWebTool::new(credential, config.search.endpoint.clone())?;
    ToolRegistry::new(vec![Arc::new(search)])
}

/// Build the MCP handler from resolved configuration
pub fn build_server(config: &ServerConfig, credential: Credential) -> ServerResult<SearchServer> {
    let registry = build_registry(config, credential)?;
    Ok(SearchServer::new(config.server.name.clone(), registry))
}
