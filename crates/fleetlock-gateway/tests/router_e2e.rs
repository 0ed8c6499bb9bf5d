//! End-to-end FleetLock flows through the production router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleetlock_core::protocol::{
    PRE_REBOOT_PATH, PROTOCOL_HEADER_KEY, PROTOCOL_HEADER_VALUE, STEADY_STATE_PATH,
};
use fleetlock_gateway::app_state::AppState;
use fleetlock_gateway::config::GatewayConfig;
use fleetlock_gateway::router::build_router;

fn app() -> (AppState, Router) {
    let state = AppState::new(GatewayConfig::default()).unwrap();
    let router = build_router(state.clone()).unwrap();
    (state, router)
}

fn fleetlock_request(path: &str, id: &str, group: &str) -> Request<Body> {
    let body = format!(r#"{{"client_params":{{"id":"{id}","group":"{group}"}}}}"#);
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(PROTOCOL_HEADER_KEY, PROTOCOL_HEADER_VALUE)
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn lock_unlock_cycle_updates_lock_metrics() {
    let (state, router) = app();
    let metrics = state.metrics();

    let resp = router
        .clone()
        .oneshot(fleetlock_request(PRE_REBOOT_PATH, "node-a", "workers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.is_empty());
    assert_eq!(metrics.lock_state("workers"), 1);
    assert_eq!(metrics.lock_transitions("workers"), 1);
    assert_eq!(metrics.lock_requests(), 1);

    // Another node is turned away while the lock is held.
    let resp = router
        .clone()
        .oneshot(fleetlock_request(PRE_REBOOT_PATH, "node-b", "workers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let v: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(v["kind"], "lock_held");
    assert_eq!(metrics.lock_transitions("workers"), 1);

    let resp = router
        .clone()
        .oneshot(fleetlock_request(STEADY_STATE_PATH, "node-a", "workers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(metrics.lock_state("workers"), 0);
    assert_eq!(metrics.lock_transitions("workers"), 2);
    assert_eq!(metrics.unlock_requests(), 1);

    assert_eq!(metrics.requests_total(PRE_REBOOT_PATH), 2);
    assert_eq!(metrics.response_status_count(PRE_REBOOT_PATH, StatusCode::OK), 1);
    assert_eq!(metrics.response_status_count(PRE_REBOOT_PATH, StatusCode::CONFLICT), 1);
    assert_eq!(metrics.response_status_count(STEADY_STATE_PATH, StatusCode::OK), 1);
}

#[tokio::test]
async fn guard_rejections_are_not_instrumented() {
    let (state, router) = app();
    let metrics = state.metrics();

    let req = Request::builder()
        .method(Method::GET)
        .uri(PRE_REBOOT_PATH)
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = Request::builder()
        .method(Method::POST)
        .uri(STEADY_STATE_PATH)
        .body(Body::from(r#"{"client_params":{"id":"a","group":"g"}}"#))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains("missing_header"));

    assert_eq!(metrics.requests_total(PRE_REBOOT_PATH), 0);
    assert_eq!(metrics.requests_total(STEADY_STATE_PATH), 0);
    assert_eq!(metrics.lock_requests(), 0);
    assert_eq!(metrics.unlock_requests(), 0);
}

#[tokio::test]
async fn undecodable_body_is_counted_with_its_status() {
    let (state, router) = app();
    let metrics = state.metrics();

    let req = Request::builder()
        .method(Method::POST)
        .uri(PRE_REBOOT_PATH)
        .header(PROTOCOL_HEADER_KEY, PROTOCOL_HEADER_VALUE)
        .body(Body::from("{}"))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains("decode_error"));

    assert_eq!(metrics.lock_requests(), 1);
    assert_eq!(metrics.response_status_count(PRE_REBOOT_PATH, StatusCode::BAD_REQUEST), 1);
}

#[tokio::test]
async fn metrics_endpoint_renders_registry() {
    let (_state, router) = app();

    router
        .clone()
        .oneshot(fleetlock_request(PRE_REBOOT_PATH, "node-a", "workers"))
        .await
        .unwrap();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let text = body_string(resp).await;
    assert!(text.contains(r#"fleetlock_lock_state{group="workers"} 1"#), "{text}");
    assert!(text.contains(r#"http_requests_total{path="/v1/pre-reboot"} 1"#), "{text}");
    assert!(
        text.contains(r#"http_response_status{path="/v1/pre-reboot",status="200"} 1"#),
        "{text}"
    );
    // The metrics endpoint itself is not instrumented.
    assert!(!text.contains(r#"path="/metrics""#), "{text}");
}
