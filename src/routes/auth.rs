//! Auth and staff administration route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::auth::{delete_user, get_user, list_users, login, logout, signup};
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        // Public routes
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        // Super-admin routes
        .route("/api/auth/users", get(list_users))
        .route(
            "/api/auth/users/:user_id",
            get(get_user).delete(delete_user),
        )
}
