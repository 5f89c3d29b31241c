//! MCP Server implementation
//!
//! Reads newline-delimited JSON-RPC messages, answers protocol methods and
//! turns `tools/call` into ProductPlan API requests.

use productplan_api::ApiClient;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeParams, InitializeResult,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "productplan-mcp-server";

/// MCP Server for ProductPlan
///
/// # Example
///
/// ```ignore
/// use productplan_api::{ApiClient, Config};
/// use productplan_mcp::ProductPlanMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new(Config::from_env()?);
///     ProductPlanMcpServer::new(client).run().await?;
///     Ok(())
/// }
/// ```
pub struct ProductPlanMcpServer {
    client: ApiClient,
    tools: Vec<ToolDefinition>,
}

impl ProductPlanMcpServer {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tools: get_tool_definitions(),
        }
    }

    /// Serve MCP over the process's stdin/stdout
    pub async fn run(&self) -> Result<()> {
        tracing::info!(tools = self.tools.len(), "ProductPlan MCP server running on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve MCP over arbitrary streams until the reader is exhausted
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    let line = line.trim_end_matches(['\n', '\r']);
                    tracing::debug!(request = %line, "Received message");
                    match self.handle_message(line).await {
                        Ok(response) => response,
                        Err(e) => serde_json::to_string(&JsonRpcResponse::error(
                            None,
                            INTERNAL_ERROR,
                            format!("Internal error: {}", e),
                        ))?,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Received a message that is not valid UTF-8");
                    serde_json::to_string(&JsonRpcResponse::error(
                        None,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                    ))?
                }
            };

            if response.is_empty() {
                continue;
            }

            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the JSON-RPC response as a string, or an empty string for
    /// notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(raw) => raw,
            Err(e) => {
                let response =
                    JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let id = raw.get("id").filter(|id| !id.is_null()).cloned();
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                let response =
                    JsonRpcResponse::error(id, INVALID_REQUEST, format!("Invalid Request: {}", e));
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return Ok(String::new());
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params)?,
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Execute a tool and wrap the outcome as an MCP tool result.
    ///
    /// Failures never escape: they become an error-flagged text result.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult {
        let outcome = handle_tool_call(&self.client, name, arguments)
            .await
            .and_then(|value| serde_json::to_string_pretty(&value).map_err(Error::from));

        match outcome {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "Tool call failed");
                ToolResult::error(format!("Error: {}", e))
            }
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, client_version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        Ok(JsonRpcResponse::success(
            id,
            json!({ "tools": serde_json::to_value(&self.tools)? }),
        ))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                ));
            }
        };

        let result = self.call_tool(&tool_params.name, tool_params.arguments).await;
        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
