//! Request middleware for loanbook

mod auth;

pub use auth::{AuthenticatedStaff, SuperAdminStaff};
