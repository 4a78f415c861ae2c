//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use synthetic_search_mcp::config::Credential;
use synthetic_search_mcp::tools::builtin::SearchWebTool;
use synthetic_search_mcp::tools::ToolRegistry;
use synthetic_search_mcp::SearchServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const SEARCH_PATH: &str = "/v2/search";

pub fn test_credential() -> Credential {
    Credential::new(TEST_API_KEY, "TEST_API_KEY").unwrap()
}

/// `search_web` tool pointed at a mock server
pub fn search_tool(base_uri: &str) -> SearchWebTool {
    SearchWebTool::new(test_credential(), format!("{base_uri}{SEARCH_PATH}")).unwrap()
}

/// MCP handler whose only tool posts to a mock server
pub fn search_server(base_uri: &str) -> SearchServer {
    let registry = ToolRegistry::new(vec![Arc::new(search_tool(base_uri))]).unwrap();
    SearchServer::new("synthetic-web-search-server", registry)
}
