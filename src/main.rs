//! Pinterest API server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pinterest_api::api;
use pinterest_api::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    tracing::info!(
        service = api::SERVICE_NAME,
        port = config.server.port,
        debug = config.debug,
        "Starting server"
    );

    api::serve(&config).await
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .unwrap_or_else(|_| EnvFilter::new("pinterest_api=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
