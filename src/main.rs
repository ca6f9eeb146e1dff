//! Loanbook Backend Server
//!
//! REST API for managing loan records and staff accounts, persisted as flat
//! JSON files and protected by bearer-token authentication.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use loanbook::auth::AuthService;
use loanbook::config::Config;
use loanbook::routes;
use loanbook::state::AppState;
use loanbook::store::JsonStore;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    // Load the record stores
    let staffs = match JsonStore::open(&config.staffs_file) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(path = %config.staffs_file.display(), error = %e, "Failed to load staff store");
            std::process::exit(1);
        }
    };
    let loans = match JsonStore::open(&config.loans_file) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(path = %config.loans_file.display(), error = %e, "Failed to load loan store");
            std::process::exit(1);
        }
    };
    tracing::info!(
        staffs = staffs.len(),
        loans = loans.len(),
        "Record stores loaded"
    );

    // Create shared app state
    let auth_service = Arc::new(AuthService::new(
        staffs.clone(),
        config.jwt_secret.clone(),
        config.token_ttl_seconds,
    ));
    let state = AppState::new(auth_service, staffs, loans);

    // Create the app router
    let app = routes::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(configure_cors(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let Some(allowed_origins) = allowed_origins.filter(|s| !s.is_empty()) else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
