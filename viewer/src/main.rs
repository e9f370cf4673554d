use anomaly_viewer::config::Config;
use anomaly_viewer::db::{self, PgRecordStore};
use anomaly_viewer::engine::PageEngine;
use anomaly_viewer::errors::Result;
use anomaly_viewer::{metrics, rest};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Shutting down");
}

async fn run(config: Config) -> Result<()> {
    let settings = config.db_settings()?;

    info!("Starting anomaly viewer");
    info!("HTTP server: {}", config.http_addr);
    info!("Database: {}", settings.url.split('@').last().unwrap_or("***"));
    info!(
        "TLS certificate validation: {}",
        if settings.tls_skip_verify { "disabled" } else { "enabled" }
    );
    info!("Count policy: {:?}", config.count_policy());

    if let Err(e) = metrics::init_metrics() {
        error!("Failed to register metrics: {}", e);
    }

    let pool = db::connect(&settings).await?;
    let engine = Arc::new(PageEngine::new(
        PgRecordStore::new(pool),
        config.count_policy(),
    ));

    let app = rest::create_router(engine, config.query_timeout());

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!("HTTP server listening on {}", config.http_addr);

    let server = async move { axum::serve(listener, app).await };

    tokio::select! {
        result = server => {
            result?;
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    Ok(())
}
