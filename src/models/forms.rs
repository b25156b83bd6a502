use serde::Deserialize;

// Missing fields deserialize to empty strings, so an absent field and an
// empty one are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
