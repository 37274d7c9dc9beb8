//! Records exchanged with the cat image service.

mod breed;
mod cat_image;
mod error_body;
mod favorite;
mod vote;

pub use breed::Breed;
pub use cat_image::CatImage;
pub use error_body::ErrorBody;
pub use favorite::Favorite;
pub use vote::{Vote, VoteQuery};
