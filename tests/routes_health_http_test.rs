// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints standalone and through the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::app;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    health_assessment_server::routes::health::HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "health-assessment-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_timestamp_is_rfc3339() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    let body: serde_json::Value = response.json();
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// Full router
// ============================================================================

#[tokio::test]
async fn test_health_endpoints_are_mounted_on_app() {
    for path in ["/health", "/ready"] {
        let response = AxumTestRequest::get(path).send(app()).await;
        assert_eq!(response.status(), 200, "{path} should be mounted");
        assert!(response.header("x-request-id").is_some());
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = AxumTestRequest::get("/api/nonexistent").send(app()).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let response = AxumTestRequest::post("/health").send(health_routes()).await;
    assert_eq!(response.status(), 405);
}
