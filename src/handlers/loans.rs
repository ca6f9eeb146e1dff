//! Loan management handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{AuthenticatedStaff, SuperAdminStaff};
use crate::models::{naira_amount, CreateLoanRequest, Loan, LoanApplicant, LoanStatus, StaffRole};
use crate::pagination::{paginate, PageMeta, PageParams};
use crate::state::AppState;

use super::auth::MessageResponse;

/// Query parameters for the loan listing
#[derive(Debug, Default, Deserialize)]
pub struct LoanListQuery {
    pub status: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl LoanListQuery {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Paginated loan listing body
#[derive(Debug, Serialize)]
pub struct LoanPage {
    pub loans: Vec<Loan>,
    pub pagination: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct CreatedLoanResponse {
    pub message: &'static str,
    pub loan: Loan,
}

/// Parse the status filter: clients are known to send values wrapped in
/// braces or quotes (`{pending}`, `'active,pending'`), so those characters
/// are stripped before splitting on commas.
fn parse_status_filter(raw: &str) -> Vec<String> {
    raw.chars()
        .filter(|c| !matches!(c, '{' | '}' | '\''))
        .collect::<String>()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// GET /api/loans - List loans, optionally filtered by status (authenticated)
///
/// Staff-role callers receive records without the applicant's running
/// `totalLoan` figure; only super admins see it.
pub async fn list_loans(
    staff: AuthenticatedStaff,
    State(state): State<AppState>,
    Query(query): Query<LoanListQuery>,
) -> Json<LoanPage> {
    let mut loans: Vec<Loan> = state.loans.with_records(|l| l.to_vec());

    if let Some(raw) = query.status.as_deref().filter(|s| !s.is_empty()) {
        let wanted = parse_status_filter(raw);
        loans.retain(|loan| wanted.iter().any(|w| w == loan.status.as_str()));
    }

    if staff.role == StaffRole::Staff {
        loans = loans.iter().map(Loan::redacted).collect();
    }

    // Newest first
    loans.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let (loans, pagination) = paginate(&loans, &query.page_params());
    Json(LoanPage { loans, pagination })
}

/// GET /api/loans/:userEmail/get - List loans for one applicant (authenticated)
pub async fn list_loans_by_email(
    _staff: AuthenticatedStaff,
    State(state): State<AppState>,
    Path(user_email): Path<String>,
    Query(params): Query<PageParams>,
) -> Json<LoanPage> {
    let mut loans: Vec<Loan> = state.loans.with_records(|l| {
        l.iter()
            .filter(|loan| loan.applicant.email == user_email)
            .cloned()
            .collect()
    });
    loans.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let (loans, pagination) = paginate(&loans, &params);
    Json(LoanPage { loans, pagination })
}

/// GET /api/loans/expired - List loans past their maturity date (authenticated)
pub async fn list_expired_loans(
    _staff: AuthenticatedStaff,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<LoanPage> {
    let today = Utc::now().date_naive();

    let mut loans: Vec<Loan> = state.loans.with_records(|l| {
        l.iter()
            .filter(|loan| loan.is_expired(today))
            .cloned()
            .collect()
    });
    // Most recently expired first
    loans.sort_by(|a, b| b.maturity_date.cmp(&a.maturity_date));

    let (loans, pagination) = paginate(&loans, &params);
    Json(LoanPage { loans, pagination })
}

/// POST /api/loans - Create a loan (super-admin)
pub async fn create_loan(
    _admin: SuperAdminStaff,
    State(state): State<AppState>,
    Json(req): Json<CreateLoanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = req.amount.filter(|s| !s.is_empty());
    let maturity_date = req.maturity_date.filter(|s| !s.is_empty());
    let (amount, maturity_date, applicant) = match (amount, maturity_date, req.applicant) {
        (Some(a), Some(m), Some(ap)) => (a, m, ap),
        _ => return Err(ApiError::Validation("Missing required fields".to_string())),
    };

    let name = applicant.name.filter(|s| !s.is_empty());
    let email = applicant.email.filter(|s| !s.is_empty());
    let telephone = applicant.telephone.filter(|s| !s.is_empty());
    let (name, email, telephone) = match (name, email, telephone) {
        (Some(n), Some(e), Some(t)) => (n, e, t),
        _ => {
            return Err(ApiError::Validation(
                "Missing required applicant information".to_string(),
            ))
        }
    };

    let maturity_date = parse_loan_date(&maturity_date)
        .ok_or_else(|| ApiError::Validation("Invalid maturity date".to_string()))?;

    let loan = Loan {
        id: next_loan_id(&state),
        amount: naira_amount(&amount),
        maturity_date,
        status: LoanStatus::Pending,
        applicant: LoanApplicant {
            name,
            email,
            telephone,
            total_loan: Some(applicant.total_loan.unwrap_or_else(|| "₦0".to_string())),
        },
        created_at: Utc::now().date_naive(),
    };

    state
        .loans
        .insert(loan.clone())
        .map_err(|e| ApiError::internal("Error creating loan", e))?;

    tracing::info!(id = %loan.id, amount = %loan.amount, "Loan created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedLoanResponse {
            message: "Loan created successfully",
            loan,
        }),
    ))
}

/// DELETE /api/loans/:loanId/delete - Remove a loan (super-admin)
pub async fn delete_loan(
    _admin: SuperAdminStaff,
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .loans
        .remove_where(|loan| loan.id == loan_id)
        .map_err(|e| ApiError::internal("Error deleting loan", e))?;

    if !removed {
        return Err(ApiError::NotFound("Loan not found".to_string()));
    }

    tracing::info!(id = %loan_id, "Loan deleted");
    Ok(Json(MessageResponse {
        message: "Loan deleted successfully",
    }))
}

/// Accept a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, truncated
/// to the calendar date.
fn parse_loan_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Draw a random 6-digit id, re-drawing on the (unlikely) collision with
/// an existing loan.
fn next_loan_id(state: &AppState) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let candidate = rng.gen_range(100_000..1_000_000).to_string();
        let taken = state
            .loans
            .with_records(|loans| loans.iter().any(|l| l.id == candidate));
        if !taken {
            return candidate;
        }
    }
}
