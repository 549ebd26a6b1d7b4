use anyhow::Context;
use std::net::SocketAddr;
use tower_http::cors::{CorsLayer, Any};
use tracing_subscriber::{fmt, EnvFilter};

use landing_builder::{config::Config, orchestrator::Orchestrator, provider::AdapterKind, routes::{self, AppState}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;
    for (kind, key, var) in [
        (AdapterKind::CandidateParts, &config.credentials.gemini_key, "GEMINI_API_KEY"),
        (AdapterKind::ChatCompletion, &config.credentials.openrouter_key, "OPENROUTER_API_KEY"),
    ] {
        if key.is_none() && config.providers.iter().any(|p| p.kind == kind) {
            tracing::warn!("⚠️ {} is not set; {:?} providers will fail every attempt", var, kind);
        }
    }
    if config.attempt_timeout.is_none() {
        tracing::info!("No per-attempt timeout configured (PAGE_ATTEMPT_TIMEOUT_SECS)");
    }

    let orchestrator = Orchestrator::from_config(&config).context("failed to build providers")?;
    tracing::info!("Provider fallback order: {}", orchestrator.provider_ids().join(" → "));
    let state = AppState::new(orchestrator);

    let app = routes::router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        );

    let addr = SocketAddr::from(([0,0,0,0], config.port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await.with_context(|| format!("cannot bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
