use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sage_api::config::Config;
use sage_api::jobs::{HttpJobSource, JobSource};
use sage_api::routes::build_router;
use sage_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sage API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Skill match mode: {:?}, upload limit: {} bytes",
        config.skill_match_mode, config.max_upload_bytes
    );

    // Initialize job source
    let job_source: Option<Arc<dyn JobSource>> = match &config.job_source_url {
        Some(url) => {
            let source = HttpJobSource::new(
                url.clone(),
                Duration::from_secs(config.job_source_timeout_secs),
            )
            .context("Failed to build job source HTTP client")?;
            info!("Job source initialized ({url})");
            Some(Arc::new(source))
        }
        None => {
            warn!("JOB_SOURCE_URL is not set; job search endpoints will return 503");
            None
        }
    };

    let state = AppState::new(config.clone(), job_source);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
