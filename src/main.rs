use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod levels;
mod llm;

use app_state::AppState;
use config::AppConfig;
use llm::client::MODEL_NAME;
use llm::HfClient;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let generator = HfClient::new(config.hf_api_key.clone(), config.model_url.clone())?;

    let state = Arc::new(AppState {
        generator: Box::new(generator),
        model_name: MODEL_NAME.to_string(),
    });

    let app = api::server::create_router(state);

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
