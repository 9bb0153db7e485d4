use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mmuni_api::{config::RelayConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from_env();
    if config.supabase.is_none() {
        warn!("Supabase credentials not configured; profile updates will fail");
    }
    let addr = config.bind_addr();

    let state = Arc::new(AppState::new(config).context("Failed to build HTTP client")?);
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("MMuni API running at http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
