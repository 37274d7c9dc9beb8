use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Request body for saving an image as a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub image_id: String,
    pub sub_id: String,
}

impl Favorite {
    /// Decode a favorite from a raw JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::parse(e.to_string()))
    }
}
