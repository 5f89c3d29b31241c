//! MCP tool catalog and result types
//!
//! Tool definitions are generated from the route table in [`crate::routes`].
//!
//! # Tool Families
//!
//! ## Roadmaps
//! - `list_roadmaps`, `get_roadmap`
//! - `get_roadmap_bars`, `get_roadmap_lanes`, `get_roadmap_milestones`
//!
//! ## Bars
//! - `get_bar`, `create_bar`, `update_bar`
//!
//! ## Discovery
//! - `list_ideas`, `get_idea`, `create_idea`, `list_opportunities`
//!
//! ## Strategy
//! - `list_objectives`, `get_objective`, `list_key_results`
//!
//! ## Launches
//! - `list_launches`, `get_launch`, `list_launch_tasks`
//!
//! ## Account
//! - `list_users`, `list_teams`, `check_status`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::routes::{TOOL_ROUTES, ToolRoute};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Concatenated text of all content items
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&ToolRoute> for ToolDefinition {
    fn from(route: &ToolRoute) -> Self {
        let properties: Map<String, Value> = route
            .params
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({ "type": "string", "description": p.description }),
                )
            })
            .collect();

        let required: Vec<&str> = route
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut input_schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            input_schema["required"] = json!(required);
        }

        ToolDefinition {
            name: route.name.to_string(),
            description: route.description.to_string(),
            input_schema,
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    TOOL_ROUTES.iter().map(ToolDefinition::from).collect()
}
