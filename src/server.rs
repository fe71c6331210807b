//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{AuthService, UserService};
use crate::config::Config;
use crate::gate::AccessPolicy;
use crate::infrastructure::persistence::{PgTokenRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repository and service wiring
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repository));
    let auth_service = Arc::new(AuthService::new(
        token_repository,
        config.token_signing_secret.clone(),
    ));

    let state = AppState {
        user_service,
        auth_service,
        policy: Arc::new(AccessPolicy::default_policy()),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
