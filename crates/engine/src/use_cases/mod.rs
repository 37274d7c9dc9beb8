//! Use cases - one per upstream operation.
//!
//! Each use case builds a `DispatchRequest`, hands it to the `UpstreamPort`
//! with the configured deadline, and turns the payload into what the HTTP
//! layer returns: parsed records for images and breeds, raw bytes for
//! favorites and votes.

pub mod cats;
pub mod favorites;
pub mod votes;

use std::time::Duration;

use catbridge_domain::DomainError;
use url::Url;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{DispatchError, DispatchRequest};

pub use cats::CatUseCases;
pub use favorites::FavoriteUseCases;
pub use votes::VoteUseCases;

/// Shared error type for upstream use cases.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// A required input was missing or malformed. Nothing was sent upstream.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The upstream payload did not have the expected shape.
    #[error("{0}")]
    Parse(String),
}

impl UseCaseError {
    /// Map a request-body decoding failure to a client error.
    pub fn invalid_body(error: DomainError) -> Self {
        match error {
            DomainError::Parse(msg) => {
                Self::Validation(format!("Error parsing request body: {}", msg))
            }
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl From<DomainError> for UseCaseError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Parse(msg) => Self::Parse(msg),
        }
    }
}

/// Where and how use cases reach the upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    base_url: Url,
    api_key: Option<String>,
    deadline: Duration,
}

impl UpstreamSettings {
    pub fn new(base_url: Url, api_key: Option<String>, deadline: Duration) -> Self {
        Self {
            base_url,
            api_key,
            deadline,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.cat_api_base_url.clone(),
            config.cat_api_key.clone(),
            config.dispatch_deadline,
        )
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Build `{base}/{segments...}?{query}`.
    ///
    /// Segments and query values are percent-encoded, so caller input cannot
    /// change the path or add parameters.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated as http(s) at config load, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Attach the API key, if one is configured.
    pub fn authorize(&self, request: DispatchRequest) -> DispatchRequest {
        match &self.api_key {
            Some(key) => request.with_credential(key.clone()),
            None => request,
        }
    }
}
