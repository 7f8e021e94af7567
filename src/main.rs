// src/main.rs
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use wolfguard_site::config::Config;
use wolfguard_site::routes::create_router;
use wolfguard_site::services::github::ActivityClient;
use wolfguard_site::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting WolfGuard site...");

    let config = Config::from_env()?;

    let activity_client = ActivityClient::from_config(&config)?;
    tracing::info!(
        "Tracking activity for {}/{} via {} (timeout {}s)",
        config.github_owner,
        config.github_repo,
        config.github_api_url,
        config.github_timeout_secs
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        activity_client,
    });

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_addr()?;
    tracing::info!("WolfGuard site listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
