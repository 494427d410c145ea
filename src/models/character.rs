use serde::{Deserialize, Serialize};

/// A character record exactly as the API returns it. The `url` doubles as the
/// identifier that episode records cross-reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawCharacter {
    pub url: String,
    pub name: String,
}
