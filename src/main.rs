#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            tracing::warn!(error = %err, "failed to load .env");
        }
    }

    if let Err(err) = run().await {
        tracing::error!(error = %err, "kindbite server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConfigError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ConfigError::Bind { addr, source })?;

    tracing::info!(%addr, "kindbite listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
