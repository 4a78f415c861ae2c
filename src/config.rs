//! Server configuration and credential loading
//!
//! Non-secret settings come from an optional TOML file (`synthetic-search.toml`
//! by default). The upstream credential is never stored in the file: the file
//! only names the environment variable that holds it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the Synthetic API key
pub const DEFAULT_API_KEY_ENV: &str = "SYNTHETIC_API_KEY";

/// Environment variable overriding the search endpoint
pub const ENDPOINT_ENV: &str = "SYNTHETIC_SEARCH_URL";

/// Upstream search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.synthetic.new/v2/search";

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "synthetic-search.toml";

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// Identity reported to MCP clients during initialization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Server name shown to MCP clients
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

/// Upstream search API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    /// Search endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_server_name() -> String {
    "synthetic-web-search-server".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),
    #[error("{0} environment variable is required")]
    MissingCredential(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the endpoint when an override is supplied (CLI flag or env var)
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint {
            self.search.endpoint = endpoint;
            self.validate()?;
        }
        Ok(self)
    }

    /// Check field consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "server.name must not be empty".to_string(),
            ));
        }

        let endpoint = self.search.endpoint.as_str();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig(format!(
                "search.endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }

        if self.search.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "search.api_key_env must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Read the credential named by `search.api_key_env`
    pub fn load_credential(&self) -> Result<Credential, ConfigError> {
        Credential::from_env(&self.search.api_key_env)
    }
}

/// Bearer token for the upstream API
///
/// Read once at startup and shared read-only afterwards. `Debug` never
/// prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty values
    pub fn new<S: Into<String>>(token: S, source: &str) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::MissingCredential(source.to_string()));
        }
        Ok(Self(token))
    }

    /// Read the token from the named environment variable
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        let token =
            std::env::var(var).map_err(|_| ConfigError::MissingCredential(var.to_string()))?;
        Self::new(token, var)
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
