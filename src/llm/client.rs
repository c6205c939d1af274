use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

pub const MODEL_NAME: &str = "google/flan-t5-large";
pub const HF_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("inference service returned HTTP {status}")]
    Status { status: StatusCode },
    #[error("network error talking to inference service: {0}")]
    Transport(reqwest::Error),
    #[error("inference response did not contain generated text")]
    MalformedResponse,
}

#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Client for the Hugging Face hosted inference API.
pub struct HfClient {
    http_client: HttpClient,
    api_key: String,
    model_url: String,
}

impl HfClient {
    pub fn new(api_key: String, model_url: String) -> Result<Self, anyhow::Error> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            api_key,
            model_url,
        })
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let response = self
            .http_client
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(GenerateError::Transport)?;

        if !response.status().is_success() {
            return Err(GenerateError::Status {
                status: response.status(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| GenerateError::MalformedResponse)?;

        extract_generated_text(body)
    }
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

/// Pulls the first `generated_text` out of the inference response body.
/// The API returns a JSON array with one object per returned sequence.
fn extract_generated_text(body: serde_json::Value) -> Result<String, GenerateError> {
    let generations: Vec<Generation> =
        serde_json::from_value(body).map_err(|_| GenerateError::MalformedResponse)?;
    generations
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or(GenerateError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_generation() {
        let body = json!([
            { "generated_text": "Plants eat sunlight." },
            { "generated_text": "ignored second sequence" }
        ]);
        assert_eq!(
            extract_generated_text(body).unwrap(),
            "Plants eat sunlight."
        );
    }

    #[test]
    fn empty_array_is_malformed() {
        let err = extract_generated_text(json!([])).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = extract_generated_text(json!([{ "text": "nope" }])).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse));
    }

    #[test]
    fn non_array_body_is_malformed() {
        let err = extract_generated_text(json!({ "error": "loading" })).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse));
    }
}
