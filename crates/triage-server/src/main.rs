use tracing_subscriber::EnvFilter;

use triage_server::config::ServerConfig;
use triage_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::load(&config).await?;
    let app = triage_server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, data_dir = %config.data_dir.display(), "triage server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
