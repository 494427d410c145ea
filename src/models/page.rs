use serde::{Deserialize, Serialize};

/// Pagination metadata attached to collection responses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageInfo {
    pub next: Option<String>,
}

/// The collection envelope every endpoint and every cache entry uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PageInfo>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// A page with no continuation, as written to the cache.
    pub fn complete(results: Vec<T>) -> Self {
        Page {
            info: None,
            results,
        }
    }
}
