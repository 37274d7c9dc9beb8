//! External service port: the upstream HTTP dispatch.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;

use super::error::DispatchError;

// =============================================================================
// Dispatch Types
// =============================================================================

/// A single outbound call to the upstream service.
///
/// Built once per inbound request and consumed by one dispatch.
#[derive(Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    method: Method,
    url: String,
    body: Option<Bytes>,
    credential: Option<String>,
}

impl DispatchRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            credential: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::new(Method::POST, url).with_body(body)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the API key sent as the `x-api-key` header.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Body-bearing writes are sent with a JSON content type.
    pub fn is_json_write(&self) -> bool {
        matches!(self.method, Method::POST | Method::PUT | Method::PATCH)
    }
}

// Credentials must never reach the logs.
impl fmt::Debug for DispatchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// =============================================================================
// Upstream Port
// =============================================================================

/// Performs one upstream call, bounded by `deadline`.
///
/// Resolves to the raw response payload whatever the upstream status was, or to
/// the first failure encountered. Implementations never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    async fn dispatch(
        &self,
        request: DispatchRequest,
        deadline: Duration,
    ) -> Result<Bytes, DispatchError>;
}
