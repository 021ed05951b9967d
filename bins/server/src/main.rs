//! Maktab Finance API Server
//!
//! Main entry point for the Maktab Finance backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maktab_api::{AppState, create_router};
use maktab_db::{CredentialStore, connect, migrate};
use maktab_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maktab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Bad configuration is fatal before anything is bound
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    migrate(&db).await.context("Failed to run migrations")?;
    info!("Database schema is up to date");

    // First run: create the admin identity
    let created = CredentialStore::new(db.clone())
        .initialize(&config.admin.username, &config.admin.password)
        .await
        .context("Failed to bootstrap admin identity")?;
    if created {
        info!(username = %config.admin.username, "Created initial admin identity");
    }

    // Create router
    let state = AppState::new(db, &config.session);
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
