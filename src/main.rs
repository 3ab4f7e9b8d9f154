use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use telecare_core::{CheckinService, CheckinStore, ServiceConfig};
use telecare_uuid::{RandomIdGenerator, SystemClock};

/// Main entry point for the telecare check-in service
///
/// Resolves configuration once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `TELECARE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TELECARE_CORS_PERMISSIVE`: Apply a permissive CORS layer (default: "true")
/// - `RUST_LOG`: tracing filter directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration values are invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("telecare_run=info".parse()?)
                .add_directive("telecare_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServiceConfig::from_env_values(
        std::env::var("TELECARE_REST_ADDR").ok(),
        std::env::var("TELECARE_CORS_PERMISSIVE").ok(),
        std::env::var("TELECARE_REVIEW_QUEUE_CAPACITY").ok(),
    )?;

    let service = CheckinService::new(Arc::new(RandomIdGenerator), Arc::new(SystemClock));
    let store = CheckinStore::with_capacity(cfg.review_queue_capacity());
    let app = api_rest::app(AppState::new(service, store), &cfg);

    tracing::info!("++ Starting telecare REST on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- telecare REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
