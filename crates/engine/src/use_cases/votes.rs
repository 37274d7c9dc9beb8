//! Image votes, forwarded to the upstream as-is.

use std::sync::Arc;

use bytes::Bytes;
use catbridge_domain::{Vote, VoteQuery};

use crate::infrastructure::ports::{DispatchRequest, UpstreamPort};

use super::{UpstreamSettings, UseCaseError};

pub struct VoteUseCases {
    upstream: Arc<dyn UpstreamPort>,
    settings: UpstreamSettings,
}

impl VoteUseCases {
    pub fn new(upstream: Arc<dyn UpstreamPort>, settings: UpstreamSettings) -> Self {
        Self { upstream, settings }
    }

    /// Cast a vote. `body` must decode as a `Vote`; the original bytes are forwarded.
    pub async fn cast(&self, body: Bytes) -> Result<Bytes, UseCaseError> {
        Vote::from_json(&body).map_err(UseCaseError::invalid_body)?;

        let url = self.settings.endpoint(&["votes"], &[]);
        let request = self.settings.authorize(DispatchRequest::post(url, body));

        Ok(self.upstream.dispatch(request, self.settings.deadline()).await?)
    }

    pub async fn list(&self, query: &VoteQuery) -> Result<Bytes, UseCaseError> {
        let url = self.settings.endpoint(&["votes"], &query.query_pairs());
        let request = self.settings.authorize(DispatchRequest::get(url));

        Ok(self.upstream.dispatch(request, self.settings.deadline()).await?)
    }
}
