//! Builtin tools
//!
//! Each tool has its own module with pure functions separated from I/O.

pub mod search_web;

pub use search_web::SearchWebTool;
