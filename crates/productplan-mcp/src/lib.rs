//! MCP Server for ProductPlan
//!
//! This crate exposes the ProductPlan REST API as tools via the Model Context
//! Protocol (MCP), so model-driven clients (Claude Desktop, Cursor, ...) can
//! read and edit roadmaps, discovery ideas, objectives and launches.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ productplan-mcp ]  route table -> one request per tool call
//!        | (HTTPS, bearer token)
//!        v
//! [ ProductPlan API v2 ]
//! ```
//!
//! The server holds no state beyond its configuration: no cache, no retries,
//! no pagination. Every tool call maps to exactly one HTTP request, and every
//! failure is reported back as an error-flagged tool result.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use handlers::handle_tool_call;
pub use server::ProductPlanMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
