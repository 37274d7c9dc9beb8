//! Validated identifiers forwarded to the cat image service.

use crate::DomainError;

/// Breed identifier used to filter the image search (e.g. `abys`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedId(String);

impl BreedId {
    /// Create a new validated breed identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the identifier is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Breed ID is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a saved favorite, as assigned by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FavoriteId(String);

impl FavoriteId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the identifier is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Favorite ID is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
