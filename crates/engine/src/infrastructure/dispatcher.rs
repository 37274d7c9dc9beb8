//! Upstream dispatcher.
//!
//! Implements `UpstreamPort` with reqwest. Every dispatch runs the HTTP call on
//! its own spawned task and races that task's result against the caller's
//! deadline. Two timeouts are layered:
//!
//! - the client-level request timeout bounds the HTTP call itself,
//! - the per-dispatch deadline bounds how long the caller waits.
//!
//! When the deadline wins the task is abandoned, not aborted: the call keeps
//! running until it completes or hits the request timeout, and its result is
//! dropped.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio::sync::oneshot;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::infrastructure::ports::{DispatchError, DispatchRequest, UpstreamPort};

/// Header carrying the upstream API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default transport-level timeout for a single upstream call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends requests to the upstream service.
#[derive(Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    pub fn new(request_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Run `request` on a spawned task and wait at most `deadline` for it.
    pub async fn dispatch(
        &self,
        request: DispatchRequest,
        deadline: Duration,
    ) -> Result<Bytes, DispatchError> {
        let dispatch_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "dispatch",
            %dispatch_id,
            method = %request.method(),
            url = %request.url(),
        );

        let client = self.client.clone();
        race(async move { execute(&client, request).await }, deadline, span).await
    }
}

/// Run `work` on its own task and wait at most `deadline` for its result.
///
/// The task is never aborted. If the deadline wins it runs to completion on
/// its own and its result is dropped.
async fn race<F>(work: F, deadline: Duration, span: tracing::Span) -> Result<Bytes, DispatchError>
where
    F: Future<Output = Result<Bytes, DispatchError>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(
        async move {
            let result = work.await;
            if tx.send(result).is_err() {
                tracing::debug!("Upstream call finished after the caller gave up; result discarded");
            }
        }
        .instrument(span.clone()),
    );

    tokio::select! {
        received = rx => match received {
            Ok(result) => result,
            // The task dropped its sender without answering, i.e. it panicked.
            Err(_) => Err(DispatchError::transport("request task ended without a result")),
        },
        _ = tokio::time::sleep(deadline) => {
            tracing::warn!(
                parent: &span,
                ?deadline,
                "Dispatch deadline exceeded, abandoning upstream call"
            );
            Err(DispatchError::DeadlineExceeded)
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

#[async_trait]
impl UpstreamPort for Dispatcher {
    async fn dispatch(
        &self,
        request: DispatchRequest,
        deadline: Duration,
    ) -> Result<Bytes, DispatchError> {
        Dispatcher::dispatch(self, request, deadline).await
    }
}

/// Build, send and read one request. Runs inside the spawned task.
async fn execute(client: &Client, request: DispatchRequest) -> Result<Bytes, DispatchError> {
    let url = Url::parse(request.url()).map_err(DispatchError::request_construction)?;

    let mut builder = client.request(request.method().clone(), url);
    if let Some(credential) = request.credential() {
        builder = builder.header(API_KEY_HEADER, credential);
    }
    if request.is_json_write() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    if let Some(body) = request.body() {
        builder = builder.body(body.clone());
    }

    let http_request = builder
        .build()
        .map_err(DispatchError::request_construction)?;

    let response = client
        .execute(http_request)
        .await
        .map_err(DispatchError::transport)?;

    let status = response.status();
    let payload = response.bytes().await.map_err(DispatchError::body_read)?;

    if !status.is_success() {
        tracing::debug!(
            status = status.as_u16(),
            "Upstream returned an error status, passing payload through"
        );
    }
    tracing::debug!(status = status.as_u16(), bytes = payload.len(), "Upstream responded");

    Ok(payload)
}
