//! Value objects - Immutable objects defined by their attributes

mod identifiers;

pub use identifiers::{BreedId, FavoriteId};
