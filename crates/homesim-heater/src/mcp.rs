//! Stateless JSON-RPC 2.0 endpoint for tool calls.
//!
//! Implements the subset of the Model Context Protocol that a tool-only
//! server needs, over plain HTTP POST with one JSON-RPC message per
//! request and no session tracking.
//!
//! | Method | Result |
//! |--------|--------|
//! | `initialize` | protocol version, capabilities, server info |
//! | `ping` | `{}` |
//! | `tools/list` | the tool catalog |
//! | `tools/call` | tool output as text + structured content |
//! | `notifications/*` | HTTP 202, no body |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::state::AppState;
use crate::tools::{self, Tool};

/// Name reported in `initialize`.
pub const SERVER_NAME: &str = "Smart Heater Controller";

/// Protocol revisions this server can speak, newest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: [&str; 3] = ["2025-06-18", "2025-03-26", "2024-11-05"];

/// Invalid JSON was received.
pub const PARSE_ERROR: i64 = -32700;
/// The JSON is not a valid request object.
pub const INVALID_REQUEST: i64 = -32600;
/// The method does not exist.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

/// An incoming JSON-RPC message.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    /// Must be `"2.0"`.
    pub jsonrpc: String,
    /// Request id. Absent for notifications.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name.
    pub method: String,
    /// Method parameters.
    #[serde(default)]
    pub params: Value,
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("JSON-RPC error {code}: {message}")]
pub struct RpcError {
    /// Error code.
    pub code: i64,
    /// Short description.
    pub message: String,
}

impl RpcError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// An outgoing JSON-RPC response.
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Echo of the request id (`null` if it could not be read).
    pub id: Value,
    /// Present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    fn from_outcome(id: Value, outcome: Result<Value, RpcError>) -> Self {
        match outcome {
            Ok(result) => Self {
                jsonrpc: "2.0",
                id,
                result: Some(result),
                error: None,
            },
            Err(error) => Self {
                jsonrpc: "2.0",
                id,
                result: None,
                error: Some(error),
            },
        }
    }
}

/// Parameters of `tools/call`.
#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Map<String, Value>>,
}

/// `POST /mcp` handler.
pub async fn handle_rpc(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let message: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            return reject(Value::Null, RpcError::new(PARSE_ERROR, format!("Parse error: {e}")));
        }
    };

    if message.is_array() {
        return reject(
            Value::Null,
            RpcError::new(INVALID_REQUEST, "Batch requests are not supported"),
        );
    }

    let request: RpcRequest = match serde_json::from_value(message) {
        Ok(r) => r,
        Err(e) => {
            return reject(
                Value::Null,
                RpcError::new(INVALID_REQUEST, format!("Invalid request: {e}")),
            );
        }
    };

    if request.jsonrpc != "2.0" {
        return reject(
            request.id.unwrap_or(Value::Null),
            RpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
        );
    }

    let Some(id) = request.id else {
        debug!(method = %request.method, "notification received");
        return StatusCode::ACCEPTED.into_response();
    };

    let outcome = dispatch(&state, &request.method, request.params).await;
    if let Err(ref e) = outcome {
        debug!(method = %request.method, code = e.code, error = %e.message, "rpc error");
    }

    Json(RpcResponse::from_outcome(id, outcome)).into_response()
}

fn reject(id: Value, error: RpcError) -> Response {
    warn!(code = error.code, error = %error.message, "rejected rpc message");
    (
        StatusCode::BAD_REQUEST,
        Json(RpcResponse::from_outcome(id, Err(error))),
    )
        .into_response()
}

/// Route a request to its method implementation.
pub async fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, RpcError> {
    match method {
        "initialize" => Ok(initialize(&params)),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({
            "tools": Tool::ALL.map(Tool::descriptor),
        })),
        "tools/call" => call(state, params).await,
        other => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        )),
    }
}

fn initialize(params: &Value) -> Value {
    let requested = params.get("protocolVersion").and_then(Value::as_str);
    let version = requested
        .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(v))
        .unwrap_or(SUPPORTED_PROTOCOL_VERSIONS[0]);

    json!({
        "protocolVersion": version,
        "capabilities": {
            "tools": { "listChanged": false },
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

async fn call(state: &AppState, params: Value) -> Result<Value, RpcError> {
    let params: CallToolParams = serde_json::from_value(params)
        .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

    let tool = Tool::from_name(&params.name)
        .ok_or_else(|| RpcError::new(INVALID_PARAMS, format!("Unknown tool: {}", params.name)))?;

    let arguments = params.arguments.unwrap_or_default();

    match tools::call_tool(state, tool, &arguments).await {
        Ok(output) => {
            let structured = serde_json::to_value(&output)
                .map_err(|e| RpcError::new(INTERNAL_ERROR, format!("serialization error: {e}")))?;
            Ok(json!({
                "content": [{ "type": "text", "text": structured.to_string() }],
                "structuredContent": structured,
                "isError": false,
            }))
        }
        Err(e) => {
            warn!(tool = tool.name(), error = %e, "tool call rejected");
            Ok(json!({
                "content": [{ "type": "text", "text": e.to_string() }],
                "isError": true,
            }))
        }
    }
}
