use serde::{Deserialize, Serialize};

/// An image returned by the random image search.
///
/// The upstream record also carries `id`, `width`, `height` and breed data;
/// only the URL is forwarded to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatImage {
    pub url: String,
}
