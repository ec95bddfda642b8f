//! Loan Application Domain
//!
//! This crate holds the business core of the loan pre-approval service:
//!
//! - **Validation**: structural checks on raw applicant input
//! - **Eligibility**: the four base rules that produce a verdict and reason
//! - **Ports**: the store interface, with an in-memory mock for tests
//! - **Workflows**: intake (validate, evaluate, persist) and inquiry
//!   (fetch, re-evaluate)
//!
//! Eligibility is a view, not state. It is computed at submission time to
//! answer the caller and recomputed on every read; no verdict is persisted.
//!
//! # Examples
//!
//! ```rust
//! use domain_loan::{ApplicantInput, ApplicationValidator};
//!
//! let input = ApplicantInput {
//!     full_name: "Jane Doe".to_string(),
//!     monthly_income: 11_000,
//!     loan_amount: 120_000,
//!     loan_purpose: "home".to_string(),
//!     age: 25,
//!     phone_number: "0851234567".to_string(),
//!     email: "demo@example.com".to_string(),
//! };
//!
//! assert!(ApplicationValidator::validate(&input).is_ok());
//! assert!(input.eligibility().eligible);
//! ```

pub mod application;
pub mod eligibility;
pub mod validation;
pub mod error;
pub mod ports;
pub mod workflow;

pub use application::{ApplicantInput, LoanApplication, ApplicationView};
pub use eligibility::{EligibilityReason, EligibilityVerdict};
pub use validation::{ApplicationValidator, ValidationError};
pub use error::LoanError;
pub use ports::{LoanApplicationPort, ApplicationQuery};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockLoanApplicationPort;
pub use workflow::{
    CreateApplicationWorkflow, InquiryWorkflow, ApplicationDecision, ApplicationListing,
};
