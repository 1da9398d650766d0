use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use skillscope::config::ServerConfig;
use skillscope::llm::client_impl::OpenAiResponsesClient;
use skillscope::server::{build_router, AppState};

/// Directory that `/save_analysis` snapshots land in.
const LOG_DIR: &str = "analysis_logs";

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();

    // Initialize logging
    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let state = AppState {
        client: Arc::new(OpenAiResponsesClient::new()?),
        log_dir: PathBuf::from(LOG_DIR),
    };
    let app = build_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("skillscope listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
