//! Full request paths: inbound route -> use case -> dispatcher -> stub upstream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete as delete_route, get as get_route, post as post_route};
use axum::Router;
use serde_json::Value;

use super::*;

const DEADLINE: Duration = Duration::from_secs(5);

#[tokio::test]
async fn breeds_are_returned_as_id_and_name() {
    let upstream = Router::new().route(
        "/breeds",
        get_route(|| async { r#"[{"id":"abys","name":"Abyssinian"}]"# }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(engine, get("/api/breeds")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], br#"[{"id":"abys","name":"Abyssinian"}]"#);
}

#[tokio::test]
async fn favorite_is_echoed_back() {
    let upstream = Router::new().route(
        "/favourites",
        post_route(|body: Bytes| async move { body }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(
        engine,
        post_json("/api/favorites", r#"{"image_id":"abc","sub_id":"u1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], br#"{"image_id":"abc","sub_id":"u1"}"#);
}

#[tokio::test]
async fn upstream_not_found_is_passed_through_as_success() {
    let upstream = Router::new().route(
        "/favourites/{id}",
        delete_route(|| async {
            (StatusCode::NOT_FOUND, r#"{"message":"NOT_FOUND"}"#)
        }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(engine, delete("/api/favorites/123")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], br#"{"message":"NOT_FOUND"}"#);
}

#[tokio::test]
async fn slow_upstream_times_out_near_deadline() {
    let upstream = Router::new().route(
        "/breeds",
        get_route(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "[]"
        }),
    );
    let engine = engine_against(upstream, Duration::from_millis(200)).await;

    let started = Instant::now();
    let (status, body) = call(engine, get("/api/breeds")).await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(&body[..], br#"{"error":"Request timed out"}"#);
    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn transport_timeout_is_reported_as_internal_error() {
    let upstream = Router::new().route(
        "/breeds",
        get_route(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "[]"
        }),
    );
    let engine =
        engine_with_timeouts(upstream, Duration::from_millis(100), Duration::from_secs(5)).await;

    let (status, body) = call(engine, get("/api/breeds")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"]
        .as_str()
        .unwrap()
        .starts_with("error making request:"));
}

#[tokio::test]
async fn missing_breed_id_never_reaches_upstream() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let upstream = Router::new().route(
        "/images/search",
        get_route(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                "[]"
            }
        }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(engine, get("/api/cat-images/by-breed")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(&body[..], br#"{"error":"Breed ID is required"}"#);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn by_breed_forwards_filter_and_all_fields() {
    let upstream = Router::new().route(
        "/images/search",
        get_route(|Query(params): Query<Vec<(String, String)>>| async move {
            assert_eq!(params, vec![("breed_ids".to_string(), "beng".to_string())]);
            r#"[{"id":"x1","url":"https://cdn/x1.jpg","breeds":[]}]"#
        }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(engine, get("/api/cat-images/by-breed?breed_id=beng")).await;

    assert_eq!(status, StatusCode::OK);
    let records: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(records[0]["id"], "x1");
    assert_eq!(records[0]["breeds"], Value::Array(vec![]));
}

#[tokio::test]
async fn votes_carry_api_key() {
    let upstream = Router::new().route(
        "/votes",
        get_route(|headers: HeaderMap| async move {
            let key = headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            format!(r#"[{{"key":"{}"}}]"#, key)
        }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (status, body) = call(engine, get("/api/votes?sub_id=u1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], format!(r#"[{{"key":"{}"}}]"#, TEST_API_KEY).as_bytes());
}

#[tokio::test]
async fn repeated_requests_are_structurally_identical() {
    let upstream = Router::new().route(
        "/images/search",
        get_route(|| async {
            r#"[{"id":"a","url":"https://cdn/a.jpg"},{"id":"b","url":"https://cdn/b.jpg"}]"#
        }),
    );
    let engine = engine_against(upstream, DEADLINE).await;

    let (first_status, first) = call(engine.clone(), get("/api/cat-images")).await;
    let (second_status, second) = call(engine, get("/api/cat-images")).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    let first: Value = serde_json::from_slice(&first).unwrap();
    let second: Value = serde_json::from_slice(&second).unwrap();
    assert_eq!(first, second);
}
