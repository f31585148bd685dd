//! Registrar server binary.
//!
//! Wires the REST store and mailer clients into the orchestrator and serves
//! the HTTP API until interrupted.
//!
//! # Usage
//!
//! ```bash
//! STORE_BASE_URL=https://store.example/v1 \
//! STORE_API_KEY=... \
//! ADMIN_ALLOWLIST=admin@club.example \
//! cargo run --bin server
//! ```

use registrar_core::{AllowlistPolicy, Registrar, SystemClock};
use registrar_store::{CollectionStore, TemplateMailer};
use registrar_web::server::{AppState, build_router};
use registrar_web::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,registrar_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        store = %config.store.base_url,
        mailer = %config.mailer.base_url,
        "configuration loaded"
    );

    let store = Arc::new(CollectionStore::new(config.store.to_client_config())?);
    let mailer = Arc::new(TemplateMailer::new(config.mailer.to_client_config())?);
    let registrar = Arc::new(Registrar::new(
        store.clone(),
        mailer,
        Arc::new(SystemClock),
    ));
    let policy = Arc::new(AllowlistPolicy::new(config.admin.allowlist.clone()));

    let state = AppState::new(registrar, store, policy);
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "registrar listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down gracefully");
        })
        .await?;

    Ok(())
}
