use ag_auth::{HashingParams, PasswordHasher, TokenService};
use ag_config::{Config, ConfigError};
use ag_db::{CredentialStore, UserRepository};
use ag_server::error::Result as ServerErrorResult;
use ag_server::{AppState, build_router, logger};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ag-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let pool = ag_db::connect(&config.database_path()?).await?;
    ag_db::migrate(&pool).await?;
    let store: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(pool));

    // Password hashing
    let hasher = PasswordHasher::new(HashingParams {
        memory_kib: config.hashing.memory_kib,
        iterations: config.hashing.iterations,
        parallelism: config.hashing.parallelism,
    })?;

    // Token service; validate() already rejected a missing secret
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let tokens = TokenService::with_hs256(secret.as_bytes(), config.auth.token_ttl())?;
    info!(
        "Token service ready: {} ttl={}s",
        tokens.algorithm(),
        tokens.ttl().as_secs()
    );

    let app = build_router(AppState::new(store, hasher, tokens));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown disabled; stop the process to exit");
            std::future::pending::<()>().await;
        }
    }
}
