//! Tests for the soft-failure step position endpoint.
//!
//! Position data is optional enrichment: every failure mode must collapse
//! to `None` so callers can render without it.

mod common;

use axum::routing::get;
use axum::Router;
use tridocs_client::ManualsApi;

use common::{spawn_backend, spawn_default_backend, TABLE_HASH};

// ---------------------------------------------------------------------------
// Test: position present
// ---------------------------------------------------------------------------

#[tokio::test]
async fn available_position_is_returned() {
    let base_url = spawn_default_backend().await;
    let api = ManualsApi::new(base_url);

    let position = api
        .step_position(TABLE_HASH, 0)
        .await
        .expect("step 0 has position data");

    assert_eq!(position.page_number, 1);
    assert_eq!(position.y_coordinate, 220.5);
    assert_eq!(position.bbox.x0, 36.0);
    assert_eq!(position.bbox.width, 524.0);
    assert_eq!(position.bbox.height, 140.0);
}

// ---------------------------------------------------------------------------
// Test: every failure mode yields None
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_position_returns_none() {
    let base_url = spawn_default_backend().await;
    let api = ManualsApi::new(base_url);

    assert!(api.step_position(TABLE_HASH, 3).await.is_none());
    assert!(api.step_position("ffffffffffff", 0).await.is_none());
}

#[tokio::test]
async fn malformed_position_body_returns_none() {
    let app = Router::new().route(
        "/step-position/{hash}/{step}",
        get(|| async { "not json at all" }),
    );
    let base_url = spawn_backend(app).await;
    let api = ManualsApi::new(base_url);

    assert!(api.step_position(TABLE_HASH, 0).await.is_none());
}

#[tokio::test]
async fn unreachable_backend_returns_none() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let api = ManualsApi::new(format!("http://{addr}"));

    assert!(api.step_position(TABLE_HASH, 0).await.is_none());
}
