//! Loanbook Backend Library
//!
//! This library exports the core modules for the loanbook backend server.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod store;
