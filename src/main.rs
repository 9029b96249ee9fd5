//! ShopSearch Server — E-Commerce Search API
//!
//! Main entry point that wires configuration, the PostgreSQL pool, the
//! Elasticsearch client, and the HTTP layer together and starts the server.

use std::net::SocketAddr;

use tracing_subscriber::{EnvFilter, fmt};

use shopsearch_api::AppState;
use shopsearch_core::config::AppConfig;
use shopsearch_core::error::AppError;
use shopsearch_database::DatabasePool;
use shopsearch_search::EsClient;

#[tokio::main]
async fn main() {
    let env = std::env::var("SHOPSEARCH_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        environment = %config.environment,
        "Starting ShopSearch v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Database connection ──────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;

    // ── Step 2: Elasticsearch connection ─────────────────────────
    let es = EsClient::new(&config.elasticsearch)?;
    if !es.ping().await? {
        return Err(AppError::search_engine("Elasticsearch ping failed"));
    }
    let cluster = es.info().await?;
    tracing::info!(
        version = %cluster.version.number,
        cluster = %cluster.cluster_name,
        "Elasticsearch connected successfully"
    );

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, db.clone(), es);
    let app = shopsearch_api::build_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            db.close().await;
            return Err(AppError::internal(format!("Failed to bind {addr}: {e}")));
        }
    };

    tracing::info!("ShopSearch server listening on {addr}");

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    // ── Step 4: Graceful shutdown ────────────────────────────────
    // The pool closes on the error path too.
    db.close().await;
    served.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
    tracing::info!("ShopSearch server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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
