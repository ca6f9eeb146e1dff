//! Staff authentication and administration handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::SuperAdminStaff;
use crate::models::{LoginRequest, SignupRequest, StaffRole, StaffView};
use crate::pagination::{paginate, PageMeta, PageParams};
use crate::state::AppState;

const TOKEN_COOKIE: &str = "token";

fn auth_cookie(token: &str, ttl_seconds: i64) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub token: String,
    pub data: StaffView,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub message: &'static str,
    pub data: Vec<StaffView>,
    pub pagination: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub data: StaffView,
}

/// POST /api/auth/signup - Register a staff account and issue a token
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (token, user) = state.auth_service.signup(req)?;
    let jar = jar.add(auth_cookie(&token, state.auth_service.token_ttl_seconds()));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(SignupResponse {
            message: "Staff member created successfully",
            token,
            data: user,
        }),
    ))
}

/// POST /api/auth/login - Authenticate and issue a token
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state.auth_service.login(&req.email, &req.password)?;
    let jar = jar.add(auth_cookie(&token, state.auth_service.token_ttl_seconds()));

    Ok((jar, Json(TokenResponse { token })))
}

/// POST /api/auth/logout - Clear the token cookie
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::from(TOKEN_COOKIE));
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
}

/// GET /api/auth/users - List staff accounts, newest id first (super-admin)
pub async fn list_users(
    _admin: SuperAdminStaff,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<UserListResponse> {
    let mut users: Vec<StaffView> = state
        .staffs
        .with_records(|staffs| staffs.iter().map(StaffView::from).collect());
    users.sort_by(|a, b| b.id.cmp(&a.id));

    let (data, pagination) = paginate(&users, &params);
    Json(UserListResponse {
        message: "Users retrieved successfully",
        data,
        pagination,
    })
}

/// GET /api/auth/users/:userId - Get a staff account by id (super-admin)
pub async fn get_user(
    _admin: SuperAdminStaff,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .staffs
        .with_records(|staffs| staffs.iter().find(|s| s.id == user_id).map(StaffView::from))
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        message: "User retrieved successfully",
        data: user,
    }))
}

/// DELETE /api/auth/users/:userId - Remove a staff account (super-admin)
///
/// Refuses to remove the last remaining super admin so the system cannot
/// lock itself out of staff administration.
pub async fn delete_user(
    _admin: SuperAdminStaff,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (target_role, super_admins) = state.staffs.with_records(|staffs| {
        let target_role = staffs.iter().find(|s| s.id == user_id).map(|s| s.role);
        let super_admins = staffs
            .iter()
            .filter(|s| s.role == StaffRole::SuperAdmin)
            .count();
        (target_role, super_admins)
    });

    let target_role =
        target_role.ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if target_role == StaffRole::SuperAdmin && super_admins <= 1 {
        return Err(ApiError::Forbidden(
            "Cannot delete the last super admin".to_string(),
        ));
    }

    state
        .staffs
        .remove_where(|s| s.id == user_id)
        .map_err(|e| ApiError::internal("Error deleting staff member", e))?;

    tracing::info!(id = user_id, "Staff member deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}
