use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::llm::client::HF_MODEL_URL;

const HF_API_KEY_ENV: &str = "HF_API_KEY";
const SECRET_KEY_ENV: &str = "SECRET_KEY";
const BIND_ADDR_ENV: &str = "BIND_ADDR";
const HF_MODEL_URL_ENV: &str = "HF_MODEL_URL";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Immutable process configuration, read from the environment once at
/// startup and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_key: String,
    /// Reserved for session signing, unused by the simplification path.
    pub secret_key: String,
    pub bind_addr: SocketAddr,
    pub model_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let hf_api_key = env::var(HF_API_KEY_ENV)
            .with_context(|| format!("{} must be set", HF_API_KEY_ENV))?;

        let secret_key = env::var(SECRET_KEY_ENV).unwrap_or_else(|_| "dev".to_string());

        let bind_addr = env::var(BIND_ADDR_ENV)
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{} is not a valid socket address", BIND_ADDR_ENV))?;

        let model_url = env::var(HF_MODEL_URL_ENV).unwrap_or_else(|_| HF_MODEL_URL.to_string());

        Ok(Self {
            hf_api_key,
            secret_key,
            bind_addr,
            model_url,
        })
    }
}
