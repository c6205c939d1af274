use serde::{Deserialize, Serialize};

use crate::levels;

#[derive(Debug, Deserialize)]
pub struct SimplifyRequest {
    // Option so an explicit `"text": null` deserializes instead of being
    // rejected with a 422 before the handler's validation runs.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    levels::DEFAULT_LEVEL.to_string()
}

#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
