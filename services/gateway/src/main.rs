mod config;
mod error;
mod handlers;
mod models;
mod router;
mod seed;
mod state;
mod store;
mod validation;

use config::GatewayConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting vendor risk gateway");

    let config = GatewayConfig::from_env()?;
    let state = AppState::in_memory(config.scorer.clone());

    let scorer_config = state.scorer.config();
    tracing::info!(
        rounding = %scorer_config.rounding,
        assessed_by = %scorer_config.assessed_by,
        "scorer configured"
    );

    if let Some(path) = &config.seed_file {
        seed::seed_vendors(&state, path).await?;
    }

    let app = create_router(state);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!("Listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
