use serde::Serialize;
use utoipa::ToSchema;

/// Greeting served on `/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    /// Always `"World"`.
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            hello: "World".to_owned(),
        }
    }
}
