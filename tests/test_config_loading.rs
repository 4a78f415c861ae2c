//! Configuration loading and validation tests
//!
//! Tests focus on observable outcomes of loading TOML files and resolving the
//! credential, not on TOML parsing details.

use std::io::Write;
use synthetic_search_mcp::config::{
    ConfigError, Credential, ServerConfig, DEFAULT_SEARCH_ENDPOINT,
};
use synthetic_search_mcp::build_server;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[server]
name = "search-dev"

[search]
endpoint = "http://localhost:8080/v2/search"
api_key_env = "DEV_SYNTHETIC_KEY"
"#
    )
    .unwrap();

    let config = ServerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.server.name, "search-dev");
    assert_eq!(config.search.endpoint, "http://localhost:8080/v2/search");
    assert_eq!(config.search.api_key_env, "DEV_SYNTHETIC_KEY");
}

#[test]
fn test_config_defaults_fill_missing_sections() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[server]\nname = \"only-name\"").unwrap();

    let config = ServerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.server.name, "only-name");
    assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
    assert_eq!(config.search.api_key_env, "SYNTHETIC_API_KEY");
}

#[test]
fn test_config_rejects_malformed_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[search\nendpoint = ").unwrap();

    let result = ServerConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_rejects_invalid_endpoint() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[search]\nendpoint = \"api.synthetic.new\"").unwrap();

    let result = ServerConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_config_missing_file() {
    let result = ServerConfig::load_from_file(std::path::Path::new(
        "/nonexistent/synthetic-search.toml",
    ));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_credential_read_from_configured_variable() {
    let mut config = ServerConfig::default();
    config.search.api_key_env = "SYNTHETIC_SEARCH_CONFIG_TEST_KEY".to_string();

    std::env::set_var("SYNTHETIC_SEARCH_CONFIG_TEST_KEY", "sk-test");
    let credential = config.load_credential().unwrap();
    std::env::remove_var("SYNTHETIC_SEARCH_CONFIG_TEST_KEY");

    assert_eq!(credential.bearer(), "Bearer sk-test");
}

#[test]
fn test_missing_credential_is_config_error() {
    let mut config = ServerConfig::default();
    config.search.api_key_env = "SYNTHETIC_SEARCH_CONFIG_TEST_ABSENT".to_string();

    let result = config.load_credential();
    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential(name)) if name == "SYNTHETIC_SEARCH_CONFIG_TEST_ABSENT"
    ));
}

#[test]
fn test_build_server_registers_single_tool() {
    let config = ServerConfig::default();
    let credential = Credential::new("sk-test", "TEST").unwrap();

    let server = build_server(&config, credential).unwrap();
    let tools = server.tools();

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "search_web");
}
