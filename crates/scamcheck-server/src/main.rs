//! Scamcheck Server
//!
//! HTTP API for scam text detection. Loads the pre-trained model artifact
//! once at startup and serves classifications from the decision pipeline;
//! a missing or corrupt artifact aborts startup instead of serving with a
//! silent fallback.

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use scamcheck_classifiers::LinearScamClassifier;
use scamcheck_rules::DecisionPipeline;
use scamcheck_server::{create_router, AppState, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting Scamcheck Server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Model artifact: {}", config.model_path);

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Load the model artifact; refusing to start without it is deliberate.
    let classifier = LinearScamClassifier::from_file(&config.model_path)
        .with_context(|| format!("failed to load model artifact from {}", config.model_path))?;

    let pipeline = DecisionPipeline::new(Arc::new(classifier), config.rules.clone())
        .context("failed to build decision pipeline")?;

    let state = AppState::new(Arc::new(pipeline), config).with_prometheus(metrics_handle);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    // Graceful shutdown handler
    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("scamcheck=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scamcheck=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "scamcheck_requests_total",
        "Total number of prediction requests received"
    );
    metrics::describe_counter!(
        "scamcheck_verdicts_total",
        "Total number of verdicts issued by label"
    );
    metrics::describe_counter!("scamcheck_errors_total", "Total number of failed predictions");

    info!("Metrics exporter initialized");
    Ok(handle)
}
