//! Saved favorites, forwarded to the upstream as-is.

use std::sync::Arc;

use bytes::Bytes;
use catbridge_domain::{Favorite, FavoriteId};

use crate::infrastructure::ports::{DispatchRequest, UpstreamPort};

use super::{UpstreamSettings, UseCaseError};

pub struct FavoriteUseCases {
    upstream: Arc<dyn UpstreamPort>,
    settings: UpstreamSettings,
}

impl FavoriteUseCases {
    pub fn new(upstream: Arc<dyn UpstreamPort>, settings: UpstreamSettings) -> Self {
        Self { upstream, settings }
    }

    /// Save a favorite. `body` must decode as a `Favorite`; the original bytes
    /// are what gets forwarded.
    pub async fn add(&self, body: Bytes) -> Result<Bytes, UseCaseError> {
        Favorite::from_json(&body).map_err(UseCaseError::invalid_body)?;

        let url = self.settings.endpoint(&["favourites"], &[]);
        let request = self.settings.authorize(DispatchRequest::post(url, body));

        Ok(self.upstream.dispatch(request, self.settings.deadline()).await?)
    }

    /// Favorites saved under `sub_id`. The parameter is always sent, empty if absent.
    pub async fn list(&self, sub_id: Option<String>) -> Result<Bytes, UseCaseError> {
        let sub_id = sub_id.unwrap_or_default();
        let url = self
            .settings
            .endpoint(&["favourites"], &[("sub_id", sub_id.as_str())]);
        let request = self.settings.authorize(DispatchRequest::get(url));

        Ok(self.upstream.dispatch(request, self.settings.deadline()).await?)
    }

    pub async fn remove(&self, id: String) -> Result<Bytes, UseCaseError> {
        let id = FavoriteId::new(id)?;
        let url = self.settings.endpoint(&["favourites", id.as_str()], &[]);
        let request = self.settings.authorize(DispatchRequest::delete(url));

        Ok(self.upstream.dispatch(request, self.settings.deadline()).await?)
    }
}
