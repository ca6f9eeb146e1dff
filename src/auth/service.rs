//! Authentication service
//!
//! Core business logic for staff signup and login against the staff
//! account store. Credentials are compared in clear text, matching the
//! historical data files this service manages.

use std::sync::Arc;

use thiserror::Error;

use crate::error::ApiError;
use crate::models::{SignupRequest, StaffAccount, StaffRole, StaffView};
use crate::store::{JsonStore, StoreError};

use super::jwt::{generate_token, JwtError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields => ApiError::Validation(err.to_string()),
            AuthError::EmailTaken => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Token(e) => ApiError::internal("Error issuing token", e),
            AuthError::Storage(e) => ApiError::internal("Error saving staff member", e),
        }
    }
}

/// Staff authentication service
pub struct AuthService {
    staffs: Arc<JsonStore<StaffAccount>>,
    jwt_secret: String,
    token_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(
        staffs: Arc<JsonStore<StaffAccount>>,
        jwt_secret: String,
        token_ttl_seconds: i64,
    ) -> Self {
        Self {
            staffs,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    /// Register a new staff account and issue a token for it.
    ///
    /// Ids are assigned monotonically from the highest existing id, so a
    /// deleted account's id is never reused.
    pub fn signup(&self, req: SignupRequest) -> Result<(String, StaffView), AuthError> {
        let name = req.name.filter(|s| !s.is_empty());
        let email = req.email.filter(|s| !s.is_empty());
        let password = req.password.filter(|s| !s.is_empty());
        let (name, email, password) = match (name, email, password) {
            (Some(n), Some(e), Some(p)) => (n, e, p),
            _ => return Err(AuthError::MissingFields),
        };
        let role = req.role.unwrap_or(StaffRole::Staff);

        let (taken, next_id) = self.staffs.with_records(|staffs| {
            let taken = staffs.iter().any(|s| s.email == email);
            let next_id = staffs.iter().map(|s| s.id).max().unwrap_or(0) + 1;
            (taken, next_id)
        });
        if taken {
            return Err(AuthError::EmailTaken);
        }

        let staff = StaffAccount {
            id: next_id,
            name,
            email,
            role,
            password,
        };
        let view = StaffView::from(&staff);
        self.staffs.insert(staff)?;

        tracing::info!(id = view.id, email = %view.email, "Staff member created");

        let token = self.issue_token(&view)?;
        Ok((token, view))
    }

    /// Authenticate by exact email and password match.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let staff = self
            .staffs
            .with_records(|staffs| {
                staffs
                    .iter()
                    .find(|s| s.email == email && s.password == password)
                    .map(StaffView::from)
            })
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::debug!(id = staff.id, "Staff member logged in");
        self.issue_token(&staff)
    }

    fn issue_token(&self, staff: &StaffView) -> Result<String, AuthError> {
        Ok(generate_token(
            staff.id,
            &staff.email,
            staff.role,
            &self.jwt_secret,
            self.token_ttl_seconds,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::verify_token;

    fn service_with(records: Vec<StaffAccount>) -> (AuthService, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path().join("staffs.json")).unwrap());
        for r in records {
            store.insert(r).unwrap();
        }
        (
            AuthService::new(store, "test-secret".to_string(), 3600),
            dir,
        )
    }

    fn staff(id: i64, email: &str, password: &str) -> StaffAccount {
        StaffAccount {
            id,
            name: format!("Staff {id}"),
            email: email.to_string(),
            role: StaffRole::Staff,
            password: password.to_string(),
        }
    }

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            role: None,
        }
    }

    #[test]
    fn test_signup_issues_decodable_token() {
        let (service, _dir) = service_with(vec![]);
        let (token, view) = service
            .signup(signup_request("Ada", "ada@example.com", "pw"))
            .unwrap();

        assert_eq!(view.id, 1);
        assert_eq!(view.role, StaffRole::Staff);

        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.id, 1);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, StaffRole::Staff);
    }

    #[test]
    fn test_signup_missing_field() {
        let (service, _dir) = service_with(vec![]);
        let req = SignupRequest {
            name: Some("Ada".to_string()),
            email: None,
            password: Some("pw".to_string()),
            role: None,
        };
        assert!(matches!(service.signup(req), Err(AuthError::MissingFields)));
    }

    #[test]
    fn test_signup_empty_field_counts_as_missing() {
        let (service, _dir) = service_with(vec![]);
        assert!(matches!(
            service.signup(signup_request("Ada", "", "pw")),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_signup_duplicate_email_does_not_mutate_store() {
        let (service, _dir) = service_with(vec![staff(1, "ada@example.com", "pw")]);
        assert!(matches!(
            service.signup(signup_request("Other", "ada@example.com", "pw2")),
            Err(AuthError::EmailTaken)
        ));
        assert_eq!(service.staffs.len(), 1);
    }

    #[test]
    fn test_signup_id_not_reused_after_delete() {
        let (service, _dir) = service_with(vec![staff(1, "a@x.com", "pw"), staff(2, "b@x.com", "pw")]);
        service.staffs.remove_where(|s| s.id == 1).unwrap();

        let (_, view) = service
            .signup(signup_request("C", "c@x.com", "pw"))
            .unwrap();
        assert_eq!(view.id, 3);
    }

    #[test]
    fn test_login() {
        let (service, _dir) = service_with(vec![staff(1, "ada@example.com", "pw")]);

        let token = service.login("ada@example.com", "pw").unwrap();
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.email, "ada@example.com");

        assert!(matches!(
            service.login("ada@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("nobody@example.com", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
