//! Route definitions for the loanbook API

mod auth;
mod loans;

pub use auth::auth_routes;
pub use loans::loan_routes;

use axum::{extract::State, routing::get, Json, Router};

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(auth_routes())
        .merge(loan_routes())
        .with_state(state)
}

async fn root() -> &'static str {
    "Loanbook API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    staffs: usize,
    loans: usize,
    version: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        staffs: state.staffs.len(),
        loans: state.loans.len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
