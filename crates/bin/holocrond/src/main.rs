//! # holocrond: holocron daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`holocron.toml` + env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use holocron_adapter_http_axum::state::AppState;
use holocron_adapter_storage_sqlite_sqlx::{
    SqliteFavoriteRepository, SqlitePersonRepository, SqlitePlanetRepository,
    SqliteUserRepository,
};
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::person_service::PersonService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = holocron_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
        enforce_foreign_keys: config.database.enforce_foreign_keys,
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let person_repo = SqlitePersonRepository::new(pool.clone());
    let planet_repo = SqlitePlanetRepository::new(pool.clone());
    let favorite_repo = SqliteFavoriteRepository::new(pool);

    // Services
    let state = AppState::new(
        UserService::new(user_repo),
        PersonService::new(person_repo),
        PlanetService::new(planet_repo),
        FavoriteService::new(favorite_repo),
    );
    let app = holocron_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "holocrond listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("holocrond stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
