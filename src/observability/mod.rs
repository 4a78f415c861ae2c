//! Observability for the search server
//!
//! Structured logging to stderr with span macros for tool calls and
//! lifecycle events.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

// Span macros for structured logging
pub use logging::{lifecycle_span, tool_span};
