//! Shared helpers for API integration tests
//!
//! Each test gets its own temporary data directory so store round-trips can
//! be asserted against the backing files.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use loanbook::auth::{generate_token, AuthService};
use loanbook::models::{Loan, LoanApplicant, LoanStatus, StaffAccount, StaffRole};
use loanbook::routes;
use loanbook::state::AppState;
use loanbook::store::JsonStore;

pub const SECRET: &str = "test-secret-key";

pub struct TestApp {
    pub app: Router,
    pub staffs_path: PathBuf,
    pub loans_path: PathBuf,
    _dir: TempDir,
}

/// Build an application over temp-file stores seeded with the given records.
pub fn spawn_app(staffs: Vec<StaffAccount>, loans: Vec<Loan>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let staffs_path = dir.path().join("staffs.json");
    let loans_path = dir.path().join("loans.json");
    std::fs::write(&staffs_path, serde_json::to_vec_pretty(&staffs).unwrap()).unwrap();
    std::fs::write(&loans_path, serde_json::to_vec_pretty(&loans).unwrap()).unwrap();

    let staff_store = Arc::new(JsonStore::open(&staffs_path).unwrap());
    let loan_store = Arc::new(JsonStore::open(&loans_path).unwrap());
    let auth_service = Arc::new(AuthService::new(
        staff_store.clone(),
        SECRET.to_string(),
        3600,
    ));
    let state = AppState::new(auth_service, staff_store, loan_store);

    TestApp {
        app: routes::app(state),
        staffs_path,
        loans_path,
        _dir: dir,
    }
}

pub fn staff_account(id: i64, email: &str, role: StaffRole) -> StaffAccount {
    StaffAccount {
        id,
        name: format!("Staff {id}"),
        email: email.to_string(),
        role,
        password: "password".to_string(),
    }
}

pub fn loan(id: &str, created: &str, maturity: &str, status: LoanStatus, email: &str) -> Loan {
    Loan {
        id: id.to_string(),
        amount: "₦5000".to_string(),
        maturity_date: date(maturity),
        status,
        applicant: LoanApplicant {
            name: "Applicant".to_string(),
            email: email.to_string(),
            telephone: "08012345678".to_string(),
            total_loan: Some("₦0".to_string()),
        },
        created_at: date(created),
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn token_for(id: i64, email: &str, role: StaffRole) -> String {
    generate_token(id, email, role, SECRET, 3600).unwrap()
}

/// Send a request through the router and return status plus parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Read a backing JSON file into a value for round-trip assertions.
pub fn read_file_json(path: &PathBuf) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}
