//! Domain models for loanbook

mod loan;
mod staff;

pub use loan::{
    naira_amount, CreateLoanApplicant, CreateLoanRequest, Loan, LoanApplicant, LoanStatus,
};
pub use staff::{LoginRequest, SignupRequest, StaffAccount, StaffRole, StaffView};
