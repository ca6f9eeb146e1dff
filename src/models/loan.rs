//! Loan models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currency prefix used by all display amounts
pub const NAIRA: char = '₦';

/// Loan status enum
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Pending,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Pending => "pending",
        }
    }
}

/// Applicant embedded in a loan record.
///
/// `total_loan` is `None` when the field has been redacted from a response;
/// it is never absent in the backing file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoanApplicant {
    pub name: String,
    pub email: String,
    pub telephone: String,
    #[serde(
        rename = "totalLoan",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_loan: Option<String>,
}

/// Loan record as persisted in the loans JSON file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Loan {
    /// 6-digit numeric string assigned at creation
    pub id: String,
    /// Display amount, always `₦`-prefixed
    pub amount: String,
    #[serde(rename = "maturityDate")]
    pub maturity_date: NaiveDate,
    pub status: LoanStatus,
    pub applicant: LoanApplicant,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
}

impl Loan {
    /// A loan is expired when its maturity date is strictly before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.maturity_date < today
    }

    /// Copy of this loan with the applicant's `totalLoan` removed,
    /// for staff-role responses.
    pub fn redacted(&self) -> Loan {
        let mut loan = self.clone();
        loan.applicant.total_loan = None;
        loan
    }
}

/// Prefix a display amount with the naira sign unless it already carries one.
pub fn naira_amount(amount: &str) -> String {
    if amount.starts_with(NAIRA) {
        amount.to_string()
    } else {
        format!("{NAIRA}{amount}")
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Applicant section of a loan creation request
#[derive(Debug, Deserialize)]
pub struct CreateLoanApplicant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(rename = "totalLoan", default)]
    pub total_loan: Option<String>,
}

/// Loan creation request body
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(rename = "maturityDate", default)]
    pub maturity_date: Option<String>,
    #[serde(default)]
    pub applicant: Option<CreateLoanApplicant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_loan(maturity: NaiveDate) -> Loan {
        Loan {
            id: "123456".to_string(),
            amount: "₦5000".to_string(),
            maturity_date: maturity,
            status: LoanStatus::Pending,
            applicant: LoanApplicant {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                telephone: "123".to_string(),
                total_loan: Some("₦0".to_string()),
            },
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_naira_amount_prefixes_once() {
        assert_eq!(naira_amount("5000"), "₦5000");
        assert_eq!(naira_amount("₦5000"), "₦5000");
    }

    #[test]
    fn test_expiry_is_strict() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(sample_loan(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()).is_expired(today));
        // maturing exactly today is not expired
        assert!(!sample_loan(today).is_expired(today));
        assert!(!sample_loan(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()).is_expired(today));
    }

    #[test]
    fn test_redacted_omits_total_loan_field() {
        let loan = sample_loan(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let json = serde_json::to_string(&loan.redacted()).unwrap();
        assert!(!json.contains("totalLoan"));

        let json = serde_json::to_string(&loan).unwrap();
        assert!(json.contains("totalLoan"));
    }

    #[test]
    fn test_loan_json_field_names() {
        let loan = sample_loan(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let value = serde_json::to_value(&loan).unwrap();
        assert_eq!(value["maturityDate"], "2024-06-15");
        assert_eq!(value["createdAt"], "2024-01-01");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["applicant"]["totalLoan"], "₦0");
    }
}
