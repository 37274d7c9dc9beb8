use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Request body for voting on an image.
///
/// The upstream treats `value` as a signed score (1 up, -1 down).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub image_id: String,
    pub sub_id: String,
    pub value: i32,
}

impl Vote {
    /// Decode a vote from a raw JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::parse(e.to_string()))
    }
}

/// Filters accepted by the vote listing. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteQuery {
    pub limit: Option<String>,
    pub order: Option<String>,
    pub sub_id: Option<String>,
    pub page: Option<String>,
}

impl VoteQuery {
    /// Build the filters from raw query pairs. The first value of a repeated key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        Self {
            limit: first("limit"),
            order: first("order"),
            sub_id: first("sub_id"),
            page: first("page"),
        }
    }

    /// Query pairs in upstream order. Absent filters are sent as empty values.
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("limit", self.limit.as_deref().unwrap_or_default()),
            ("order", self.order.as_deref().unwrap_or_default()),
            ("sub_id", self.sub_id.as_deref().unwrap_or_default()),
            ("page", self.page.as_deref().unwrap_or_default()),
        ]
    }
}
