//! Authentication for loanbook
//!
//! Token issuance/verification and the signup/login service.

pub mod jwt;
pub mod service;

pub use jwt::{generate_token, verify_token, Claims, JwtError};
pub use service::{AuthError, AuthService};
