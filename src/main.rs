//! DocuGen API Server

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use docugen_api::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docugen_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Configuration is read from the environment exactly once
    let config = Config::from_env();

    info!("Initializing DocuGen API...");
    let state = AppState::new(&config).await?;
    let state = Arc::new(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting DocuGen API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
