//! Image search and breed lookup.

use std::sync::Arc;

use catbridge_domain::{Breed, BreedId, CatImage};
use serde_json::{Map, Value};

use crate::infrastructure::ports::{DispatchRequest, UpstreamPort};

use super::{UpstreamSettings, UseCaseError};

/// How many images the random search asks for.
pub const RANDOM_IMAGE_LIMIT: &str = "10";

/// An image record as returned by the breed-filtered search, all fields kept.
pub type ImageRecord = Map<String, Value>;

pub struct CatUseCases {
    upstream: Arc<dyn UpstreamPort>,
    settings: UpstreamSettings,
}

impl CatUseCases {
    pub fn new(upstream: Arc<dyn UpstreamPort>, settings: UpstreamSettings) -> Self {
        Self { upstream, settings }
    }

    /// A page of random images, reduced to their URLs.
    pub async fn random_images(&self) -> Result<Vec<CatImage>, UseCaseError> {
        let url = self
            .settings
            .endpoint(&["images", "search"], &[("limit", RANDOM_IMAGE_LIMIT)]);
        let request = self.settings.authorize(DispatchRequest::get(url));

        let payload = self.upstream.dispatch(request, self.settings.deadline()).await?;

        serde_json::from_slice(&payload)
            .map_err(|e| UseCaseError::Parse(format!("Error parsing cat images: {}", e)))
    }

    /// Every known breed, reduced to id and name.
    ///
    /// The breed list is public, so no credential is sent.
    pub async fn breeds(&self) -> Result<Vec<Breed>, UseCaseError> {
        let url = self.settings.endpoint(&["breeds"], &[]);

        let payload = self
            .upstream
            .dispatch(DispatchRequest::get(url), self.settings.deadline())
            .await?;

        serde_json::from_slice(&payload)
            .map_err(|e| UseCaseError::Parse(format!("Error parsing breeds: {}", e)))
    }

    /// Images of one breed, passed through as loosely typed records.
    ///
    /// An empty or missing `breed_id` fails validation before anything is sent.
    pub async fn images_by_breed(
        &self,
        breed_id: Option<String>,
    ) -> Result<Vec<ImageRecord>, UseCaseError> {
        let breed_id = BreedId::new(breed_id.unwrap_or_default())?;
        let url = self
            .settings
            .endpoint(&["images", "search"], &[("breed_ids", breed_id.as_str())]);

        let payload = self
            .upstream
            .dispatch(DispatchRequest::get(url), self.settings.deadline())
            .await?;

        serde_json::from_slice(&payload)
            .map_err(|e| UseCaseError::Parse(format!("Error parsing cat images: {}", e)))
    }
}
