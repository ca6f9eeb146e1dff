//! Authentication extractors
//!
//! Bearer-token verification and role enforcement. The token is taken from
//! the `Authorization` header, falling back to the `token` cookie set at
//! signup/login.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

use crate::auth::{verify_token, AuthService};
use crate::error::ApiError;
use crate::models::StaffRole;

/// Authenticated staff identity extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub id: i64,
    pub email: String,
    pub role: StaffRole,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedStaff
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        let token = match bearer {
            Some(token) => token,
            None => {
                // No Authorization header; fall back to the token cookie
                let jar = CookieJar::from_request_parts(parts, state)
                    .await
                    .expect("cookie extraction is infallible");
                match jar.get("token") {
                    Some(cookie) => cookie.value().to_string(),
                    None => {
                        return Err(ApiError::Unauthorized(
                            "Access denied. No token provided.".to_string(),
                        )
                        .into_response())
                    }
                }
            }
        };

        let auth_service = Arc::<AuthService>::from_ref(state);
        let claims = verify_token(&token, auth_service.jwt_secret()).map_err(|_| {
            ApiError::Forbidden("Invalid token.".to_string()).into_response()
        })?;

        Ok(AuthenticatedStaff {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Extractor requiring the `superAdmin` role
#[derive(Debug, Clone)]
pub struct SuperAdminStaff(pub AuthenticatedStaff);

#[async_trait]
impl<S> FromRequestParts<S> for SuperAdminStaff
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let staff = AuthenticatedStaff::from_request_parts(parts, state).await?;

        if staff.role != StaffRole::SuperAdmin {
            return Err(ApiError::Forbidden(
                "Access denied. Super Admin only.".to_string(),
            )
            .into_response());
        }

        Ok(SuperAdminStaff(staff))
    }
}
