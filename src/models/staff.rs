//! Staff account models

use serde::{Deserialize, Serialize};

/// Staff role enum
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    #[serde(rename = "staff")]
    Staff,
    #[serde(rename = "superAdmin")]
    SuperAdmin,
}

impl Default for StaffRole {
    fn default() -> Self {
        StaffRole::Staff
    }
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Staff => "staff",
            StaffRole::SuperAdmin => "superAdmin",
        }
    }
}

/// Staff account record as persisted in the staff JSON file.
///
/// The password is stored in clear text, matching the historical data
/// files this service reads and writes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StaffAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub password: String,
}

/// Staff view sanitized for API responses (no password)
#[derive(Debug, Serialize, Clone)]
pub struct StaffView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

impl From<&StaffAccount> for StaffView {
    fn from(staff: &StaffAccount) -> Self {
        Self {
            id: staff.id,
            name: staff.name.clone(),
            email: staff.email.clone(),
            role: staff.role,
        }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Signup request body.
///
/// Required fields are optional at the serde level so that a missing field
/// produces a 400 with the validation message rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<StaffRole>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
