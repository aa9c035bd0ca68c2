// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for the covenant form surface
// Usage: cargo run --features api --bin api_server

use convenant_generator::{create_router, AppState, GeneratorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "convenant_generator=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration: optional CONVENANT_CONFIG file, then HOST / PORT
    let config = GeneratorConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  DOCUMENT_TYPE: {}", config.document_type);

    let addr = config.bind_address();
    let state = AppState::new(config);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
