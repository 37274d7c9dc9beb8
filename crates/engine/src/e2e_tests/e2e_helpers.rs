//! Helpers shared by the end-to-end tests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use crate::api::routes;
use crate::app::App;
use crate::infrastructure::dispatcher::Dispatcher;
use crate::test_fixtures::{spawn_upstream, upstream_settings};

/// Key the stub upstreams expect in `x-api-key`.
pub const TEST_API_KEY: &str = "test_key";

/// The engine router wired to a stub upstream serving `upstream` under `/v1`.
pub async fn engine_against(upstream: Router, deadline: Duration) -> Router {
    engine_with_timeouts(upstream, Duration::from_secs(10), deadline).await
}

pub async fn engine_with_timeouts(
    upstream: Router,
    request_timeout: Duration,
    deadline: Duration,
) -> Router {
    let (base, _server) = spawn_upstream(Router::new().nest("/v1", upstream)).await;
    let settings = upstream_settings(&format!("{}/v1", base), Some(TEST_API_KEY), deadline);
    let app = App::new(Arc::new(Dispatcher::new(request_timeout)), settings);
    routes().with_state(Arc::new(app))
}

/// Send one request through `router` and collect status and body.
pub async fn call(router: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, json: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
