//! MCP server handler
//!
//! Adapts the [`ToolRegistry`] to rmcp's `ServerHandler`: `tools/list`
//! enumerates registry descriptions and `tools/call` dispatches into the
//! registry. Tool failures become `isError` results; only unknown tool names
//! are protocol errors.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::Value;
use tracing::{debug, warn};

use crate::tools::{ToolDescription, ToolError, ToolRegistry};

/// MCP handler serving a fixed tool registry
#[derive(Clone)]
pub struct SearchServer {
    name: String,
    registry: Arc<ToolRegistry>,
}

impl SearchServer {
    pub fn new<S: Into<String>>(name: S, registry: ToolRegistry) -> Self {
        Self {
            name: name.into(),
            registry: Arc::new(registry),
        }
    }

    /// Registry tools in MCP form
    pub fn tools(&self) -> Vec<McpTool> {
        self.registry
            .describe_all()
            .into_iter()
            .map(to_mcp_tool)
            .collect()
    }

    /// Run one `tools/call` request against the registry
    pub async fn dispatch(
        &self,
        tool_name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let parameters = Value::Object(arguments.unwrap_or_default());

        match self.registry.execute_tool(tool_name, &parameters).await {
            Ok(text) => {
                debug!(tool = tool_name, bytes = text.len(), "Tool call succeeded");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(ToolError::UnknownTool(name)) => {
                warn!(tool = %name, "Call for unknown tool");
                Err(McpError::invalid_params(
                    format!("Tool {name} not found"),
                    None,
                ))
            }
            Err(e) => {
                if e.is_validation_error() {
                    debug!(tool = tool_name, error = %e, "Rejected tool arguments");
                } else {
                    warn!(tool = tool_name, error = %e, "Tool call failed");
                }
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

fn to_mcp_tool(description: ToolDescription) -> McpTool {
    let schema = match description.parameters {
        Value::Object(schema) => schema,
        _ => JsonObject::new(),
    };
    McpTool::new(description.name, description.description, schema)
}

impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Web search via the Synthetic API. Call search_web with a query string; \
                 results are returned as JSON text."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request.name.as_ref(), request.arguments).await
    }
}
