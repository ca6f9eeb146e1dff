//! Loan route definitions

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::loans::{
    create_loan, delete_loan, list_expired_loans, list_loans, list_loans_by_email,
};
use crate::state::AppState;

pub fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/api/loans", get(list_loans).post(create_loan))
        .route("/api/loans/expired", get(list_expired_loans))
        // both routes share the `:id` segment name; the handlers bind it as
        // an applicant email and a loan id respectively
        .route("/api/loans/:id/get", get(list_loans_by_email))
        .route("/api/loans/:id/delete", delete(delete_loan))
}
