//! Tool system for the search server
//!
//! Tools describe themselves with a JSON schema and execute against raw JSON
//! arguments. The registry is built once at startup and never changes.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod builtin;

/// Tool interface
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and input schema
    fn describe(&self) -> ToolDescription;

    /// Run the tool. Returns the text payload of a successful result.
    async fn execute(&self, parameters: &Value) -> Result<String, ToolError>;
}

/// Static tool metadata
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Immutable set of tools, keyed by name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Build a registry from a fixed list of tools.
    ///
    /// Duplicate names are rejected.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self, ToolError> {
        let mut registry = Self::default();
        for tool in tools {
            let name = tool.describe().name;
            if registry.tools.contains_key(&name) {
                return Err(ToolError::DuplicateTool(name));
            }
            registry.order.push(name.clone());
            registry.tools.insert(name, tool);
        }
        Ok(registry)
    }

    /// Descriptions of all tools, in registration order
    pub fn describe_all(&self) -> Vec<ToolDescription> {
        self.order
            .iter()
            .filter_map(|name| self.describe_tool(name))
            .collect()
    }

    /// Get tool description
    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Execute a tool by name
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        parameters: &Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        tool.execute(parameters).await
    }

    /// Get list of available tool names
    pub fn list_tools(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Per-invocation tool errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Query parameter is required")]
    MissingQuery,
    #[error("Query parameter must be a string")]
    InvalidQuery,
    #[error("Synthetic API error: {status} {reason} - {body}")]
    UpstreamStatus {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl ToolError {
    /// True when the caller sent bad arguments, as opposed to an upstream failure
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ToolError::MissingQuery | ToolError::InvalidQuery)
    }
}
