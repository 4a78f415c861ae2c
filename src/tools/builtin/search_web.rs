//! Web search tool backed by the Synthetic search API
//!
//! One invocation is one authenticated POST to the search endpoint. The
//! `results` field of the response is passed through untouched and rendered
//! as indented JSON text.

use crate::config::Credential;
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use tracing::{debug, warn, Instrument};

/// Name the tool is registered under
pub const TOOL_NAME: &str = "search_web";

/// `search_web` builtin
pub struct SearchWebTool {
    client: reqwest::Client,
    credential: Credential,
    endpoint: String,
}

impl SearchWebTool {
    /// Create the tool with its credential and upstream endpoint
    pub fn new<S: Into<String>>(credential: Credential, endpoint: S) -> Result<Self, ToolError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ToolError::InitializationError(e.to_string()))?;

        Ok(Self {
            client,
            credential,
            endpoint: endpoint.into(),
        })
    }

    /// Extract a non-empty query string from the call arguments (pure function)
    fn validate_query(parameters: &Value) -> Result<&str, ToolError> {
        match parameters.get("query") {
            None | Some(Value::Null) => Err(ToolError::MissingQuery),
            Some(Value::String(query)) if query.is_empty() => Err(ToolError::MissingQuery),
            Some(Value::String(query)) => Ok(query.as_str()),
            Some(_) => Err(ToolError::InvalidQuery),
        }
    }

    /// Build search payload (pure function)
    fn build_search_payload(query: &str) -> Value {
        json!({ "query": query })
    }

    /// Take the `results` field out of a response body (pure function)
    fn extract_results(mut body: Value) -> Result<Value, ToolError> {
        body.as_object_mut()
            .and_then(|object| object.remove("results"))
            .ok_or_else(|| {
                ToolError::InvalidResponse("response has no `results` field".to_string())
            })
    }

    /// Render results as 2-space indented JSON (pure function)
    fn format_results(results: &Value) -> Result<String, ToolError> {
        serde_json::to_string_pretty(results).map_err(|e| ToolError::InvalidResponse(e.to_string()))
    }

    /// Status phrase as sent by the upstream, else the canonical one
    fn reason_phrase(response: &reqwest::Response) -> String {
        response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
            .or_else(|| response.status().canonical_reason())
            .unwrap_or("")
            .to_string()
    }

    /// Single upstream round trip for an already validated query
    async fn search(&self, query: &str) -> Result<String, ToolError> {
        let payload = Self::build_search_payload(query);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ToolError::Request(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Synthetic API responded");

        if !status.is_success() {
            let reason = Self::reason_phrase(&response);
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Synthetic API returned an error status");
            return Err(ToolError::UpstreamStatus {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ToolError::InvalidResponse(e.to_string()))?;

        let results = Self::extract_results(body)?;
        Self::format_results(&results)
    }
}

#[async_trait]
impl Tool for SearchWebTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TOOL_NAME.to_string(),
            description: "Search the web using Synthetic API".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query string"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, parameters: &Value) -> Result<String, ToolError> {
        let query = Self::validate_query(parameters)?;

        self.search(query)
            .instrument(crate::tool_span!(tool = TOOL_NAME, query_len = query.len()))
            .await
    }
}
