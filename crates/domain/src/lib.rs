//! Catbridge domain types.
//!
//! Wire records exchanged with the cat image service and the value objects
//! that guard the inputs forwarded to it.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Breed, CatImage, ErrorBody, Favorite, Vote, VoteQuery};
pub use error::DomainError;
pub use value_objects::{BreedId, FavoriteId};
