//! JWT token generation and validation
//!
//! Tokens embed the staff identity (id, email, role) and expire after the
//! configured TTL (one hour by default).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::StaffRole;

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// JWT claims carried by a staff token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Staff account id
    pub id: i64,
    /// Staff email
    pub email: String,
    /// Staff role
    pub role: StaffRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Generate a signed token for a staff identity
pub fn generate_token(
    id: i64,
    email: &str,
    role: StaffRole,
    secret: &str,
    ttl_seconds: i64,
) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        id,
        email: email.to_string(),
        role,
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify and decode a staff token
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // Claims carry the identity directly rather than registered claims
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::InvalidToken(e.to_string()),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let secret = "test-secret-key";
        let token = generate_token(3, "ada@example.com", StaffRole::SuperAdmin, secret, 3600)
            .unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.id, 3);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, StaffRole::SuperAdmin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_invalid_token() {
        let result = verify_token("invalid.token.here", "test-secret-key");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret() {
        let token = generate_token(1, "a@x.com", StaffRole::Staff, "secret1", 3600).unwrap();
        assert!(verify_token(&token, "secret2").is_err());
    }

    #[test]
    fn test_expired_token() {
        // well past the default validation leeway
        let token = generate_token(1, "a@x.com", StaffRole::Staff, "s", -600).unwrap();
        assert!(matches!(
            verify_token(&token, "s"),
            Err(JwtError::TokenExpired)
        ));
    }
}
