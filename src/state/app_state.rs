//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::models::{Loan, StaffAccount};
use crate::store::JsonStore;

/// Shared application state.
///
/// The stores are owned here and injected into handlers through the axum
/// `State` extractor; no module holds file-scope globals.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub staffs: Arc<JsonStore<StaffAccount>>,
    pub loans: Arc<JsonStore<Loan>>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        staffs: Arc<JsonStore<StaffAccount>>,
        loans: Arc<JsonStore<Loan>>,
    ) -> Self {
        Self {
            auth_service,
            staffs,
            loans,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<JsonStore<StaffAccount>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.staffs.clone()
    }
}

impl FromRef<AppState> for Arc<JsonStore<Loan>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loans.clone()
    }
}
