//! HTTP handlers for loanbook

pub mod auth;
pub mod loans;
