//! Test fixtures: stub upstream servers and preconfigured settings.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::spawn_upstream;
//!
//! let (base, _server) = spawn_upstream(
//!     Router::new().route("/v1/breeds", get(|| async { "[]" })),
//! ).await;
//! ```

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use crate::use_cases::UpstreamSettings;

/// Serve `router` on an ephemeral localhost port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and the server task. The
/// server lives until the task is dropped with the test runtime.
pub(crate) async fn spawn_upstream(router: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), handle)
}

/// Settings pointing at a fake upstream, with the given key and deadline.
pub(crate) fn upstream_settings(
    base_url: &str,
    api_key: Option<&str>,
    deadline: Duration,
) -> UpstreamSettings {
    UpstreamSettings::new(
        Url::parse(base_url).unwrap(),
        api_key.map(str::to_string),
        deadline,
    )
}
