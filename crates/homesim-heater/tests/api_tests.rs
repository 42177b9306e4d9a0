//! Integration tests for the heater controller HTTP surface.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use homesim_core::SequenceNoise;
use homesim_heater::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::with_noise(Box::new(SequenceNoise::new(vec![
        1.0, -2.5, 4.99,
    ]))));
    let router = build_router(Arc::clone(&state), "/mcp");
    (state, router)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn rpc(router: &Router, message: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::post("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(message.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn call_tool(router: &Router, name: &str, arguments: Value) -> Value {
    let (status, body) = rpc(
        router,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["result"].clone()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_health() {
    let (_, router) = make_router();
    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response.into_body()).await,
        json!({"status": "healthy"})
    );
}

#[tokio::test]
async fn test_initialize_reports_server_info() {
    let (_, router) = make_router();
    let (status, body) = rpc(
        &router,
        json!({
            "jsonrpc": "2.0",
            "id": "init-1",
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": { "name": "test", "version": "0" },
            },
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "init-1");
    assert_eq!(body["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(body["result"]["serverInfo"]["name"], "Smart Heater Controller");
    assert!(body["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_initialize_with_unknown_version_offers_latest() {
    let (_, router) = make_router();
    let (_, body) = rpc(
        &router,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": { "protocolVersion": "1999-01-01" },
        }),
    )
    .await;
    assert_eq!(body["result"]["protocolVersion"], "2025-06-18");
}

#[tokio::test]
async fn test_notification_is_accepted_without_body() {
    let (_, router) = make_router();
    let response = router
        .oneshot(
            Request::post("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_tools_list() {
    let (_, router) = make_router();
    let (status, body) = rpc(
        &router,
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["get_setpoint", "modify_setpoint", "get_consumption"]);
    assert_eq!(
        body["result"]["tools"][1]["inputSchema"]["required"],
        json!(["temperature"])
    );
}

#[tokio::test]
async fn test_setpoint_scenario() {
    let (_, router) = make_router();

    let result = call_tool(&router, "get_setpoint", json!({})).await;
    assert_eq!(result["isError"], false);
    assert_eq!(
        result["structuredContent"],
        json!({"setpoint": 20, "unit": "celsius"})
    );

    let result = call_tool(&router, "modify_setpoint", json!({"temperature": 15})).await;
    assert_eq!(result["isError"], false);
    assert_eq!(
        result["structuredContent"],
        json!({
            "previous_setpoint": 20,
            "new_setpoint": 15,
            "status": "updated",
            "unit": "celsius",
        })
    );
    let text: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, result["structuredContent"]);

    let result = call_tool(&router, "get_setpoint", json!({})).await;
    assert_eq!(result["structuredContent"]["setpoint"], 15);
}

#[tokio::test]
async fn test_every_valid_setpoint_is_stored() {
    let (state, router) = make_router();
    for t in 8..=25 {
        let result = call_tool(&router, "modify_setpoint", json!({"temperature": t})).await;
        assert_eq!(result["isError"], false, "temperature {t}");
        assert_eq!(u64::from(state.setpoint.get().await.celsius()), t);
    }
}

#[tokio::test]
async fn test_invalid_setpoint_is_a_tool_error() {
    let (state, router) = make_router();

    let result = call_tool(&router, "modify_setpoint", json!({"temperature": 30})).await;
    assert_eq!(result["isError"], true);
    assert_eq!(
        result["content"][0]["text"],
        "Temperature must be between 8 and 25°C"
    );

    let result = call_tool(&router, "modify_setpoint", json!({"temperature": "warm"})).await;
    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "Temperature must be an integer");

    assert_eq!(state.setpoint.get().await.celsius(), 20);
}

#[tokio::test]
async fn test_consumption_at_default_setpoint() {
    let (_, router) = make_router();
    let result = call_tool(&router, "get_consumption", json!({"days": 3})).await;
    assert_eq!(result["isError"], false);

    let report = &result["structuredContent"];
    assert_eq!(report["days"], 3);
    // base 24.0 with noise 1.0, -2.5, 4.99
    assert_eq!(
        report["daily_consumption"],
        json!([
            {"day": 1, "kwh": 25.0},
            {"day": 2, "kwh": 21.5},
            {"day": 3, "kwh": 28.99},
        ])
    );
    assert_eq!(report["total_kwh"], 75.49);
    assert_eq!(report["average_kwh_per_day"], 25.16);
}

#[tokio::test]
async fn test_consumption_window_limits() {
    let (_, router) = make_router();
    for days in [0, 366] {
        let result = call_tool(&router, "get_consumption", json!({"days": days})).await;
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Days must be between 1 and 365");
    }
    let result = call_tool(&router, "get_consumption", json!({"days": 365})).await;
    assert_eq!(
        result["structuredContent"]["daily_consumption"]
            .as_array()
            .unwrap()
            .len(),
        365
    );
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() {
    let (_, router) = make_router();
    let (status, body) = rpc(
        &router,
        json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": { "name": "set_setpoint", "arguments": {} },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 9);
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_method() {
    let (_, router) = make_router();
    let (_, body) = rpc(
        &router,
        json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}),
    )
    .await;
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let (_, router) = make_router();
    let response = router
        .oneshot(
            Request::post("/mcp")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn test_batch_is_rejected() {
    let (_, router) = make_router();
    let (status, body) = rpc(
        &router,
        json!([{"jsonrpc": "2.0", "id": 1, "method": "ping"}]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32600);
}

#[tokio::test]
async fn test_ping() {
    let (_, router) = make_router();
    let (_, body) = rpc(&router, json!({"jsonrpc": "2.0", "id": 4, "method": "ping"})).await;
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_get_on_rpc_path_is_not_allowed() {
    let (_, router) = make_router();
    let response = router
        .oneshot(Request::get("/mcp").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
