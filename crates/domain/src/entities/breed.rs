use serde::{Deserialize, Serialize};

/// A breed summary as listed by the breeds endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
}
