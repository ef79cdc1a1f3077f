pub mod analysis;
pub mod api;
pub mod config;
pub mod flow;
pub mod models;
pub mod validation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::analysis::{AnalysisEngine, OllamaClient};

/// Wire up tracing, the analysis engine, and the HTTP API, then run
/// until interrupted.
pub async fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let engine = Arc::new(AnalysisEngine::new(
        Arc::new(OllamaClient::from_config()),
        config::analysis_model(),
    ));

    if !engine.model_ready().await {
        tracing::warn!(
            model = engine.model(),
            "Analysis model not available yet — submissions will fail until it is"
        );
    }

    match api::start_api_server(engine, config::bind_addr()).await {
        Ok(mut server) => {
            tracing::info!(addr = %server.session.server_addr, "Symptomscope API ready");
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
            }
            server.shutdown();
        }
        Err(e) => {
            tracing::error!("Failed to start API server: {e}");
            std::process::exit(1);
        }
    }
}
