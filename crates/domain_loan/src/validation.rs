//! Applicant input validation
//!
//! Structural checks that run before any eligibility rule. They decide
//! whether a submission is well-formed, never whether it is approvable.
//!
//! # Validation Rules
//!
//! ## Presence
//! Every field must be non-empty (strings) or non-zero (numbers). All
//! missing fields are collected and reported together, in declaration order.
//!
//! ## Field checks
//! Run in order, stopping at the first failure:
//! - Full name between 2 and 255 characters
//! - Monthly income between 5,000 and 5,000,000
//! - Loan amount between 1,000 and 5,000,000
//! - Purpose one of `home`, `car`, `education`, `personal`, `business`
//! - Age not negative
//! - Phone number of exactly 10 ASCII digits
//! - Email shaped like `local@domain.tld`
//!
//! `business` passes here even though eligibility declines it, and age has
//! no upper bound here even though eligibility caps it at 60. The two layers
//! answer different questions and are kept separate.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::application::ApplicantInput;

/// Purposes accepted as well-formed input
pub const VALID_PURPOSES: [&str; 5] = ["home", "car", "education", "personal", "business"];

/// Allowed full name length, in characters
pub const FULL_NAME_LENGTH: RangeInclusive<usize> = 2..=255;

/// Allowed monthly income
pub const MONTHLY_INCOME_RANGE: RangeInclusive<i64> = 5_000..=5_000_000;

/// Allowed loan amount
pub const LOAN_AMOUNT_RANGE: RangeInclusive<i64> = 1_000..=5_000_000;

/// Required phone number length
pub const PHONE_NUMBER_LENGTH: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Reasons a submission is rejected before eligibility runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Full name must be between 2 and 255 characters")]
    FullNameLength,

    #[error("Monthly income must be between 5,000 and 5,000,000")]
    MonthlyIncomeOutOfRange,

    #[error("Loan amount must be between 1,000 and 5,000,000")]
    LoanAmountOutOfRange,

    #[error("Loan purpose must be one of: home, car, education, personal, business")]
    UnknownPurpose,

    #[error("Age must be a number more than 0")]
    NegativeAge,

    #[error("Phone number must be 10 digits and numeric")]
    InvalidPhoneNumber,

    #[error("Email must be a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Field names reported by a presence failure, empty otherwise
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Validator for applicant submissions
pub struct ApplicationValidator;

impl ApplicationValidator {
    /// Validates a submission: presence first, then the field checks
    pub fn validate(input: &ApplicantInput) -> Result<(), ValidationError> {
        let missing = Self::missing_fields(input);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        Self::check_values(input)
    }

    /// Collects every absent field, in declaration order
    pub fn missing_fields(input: &ApplicantInput) -> Vec<&'static str> {
        let checks = [
            ("fullName", input.full_name.is_empty()),
            ("monthlyIncome", input.monthly_income == 0),
            ("loanAmount", input.loan_amount == 0),
            ("loanPurpose", input.loan_purpose.is_empty()),
            ("age", input.age == 0),
            ("phoneNumber", input.phone_number.is_empty()),
            ("email", input.email.is_empty()),
        ];

        checks
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect()
    }

    fn check_values(input: &ApplicantInput) -> Result<(), ValidationError> {
        if !FULL_NAME_LENGTH.contains(&input.full_name.chars().count()) {
            return Err(ValidationError::FullNameLength);
        }
        if !MONTHLY_INCOME_RANGE.contains(&input.monthly_income) {
            return Err(ValidationError::MonthlyIncomeOutOfRange);
        }
        if !LOAN_AMOUNT_RANGE.contains(&input.loan_amount) {
            return Err(ValidationError::LoanAmountOutOfRange);
        }
        if !is_valid_purpose(&input.loan_purpose) {
            return Err(ValidationError::UnknownPurpose);
        }
        if input.age < 0 {
            return Err(ValidationError::NegativeAge);
        }
        if !is_valid_phone_number(&input.phone_number) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        if !is_valid_email(&input.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Returns true if the purpose is one of [`VALID_PURPOSES`]
pub fn is_valid_purpose(purpose: &str) -> bool {
    VALID_PURPOSES.contains(&purpose)
}

/// Returns true for exactly ten ASCII digits
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_NUMBER_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the address matches `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ApplicantInput {
        ApplicantInput {
            full_name: "Jane Doe".to_string(),
            monthly_income: 11_000,
            loan_amount: 120_000,
            loan_purpose: "home".to_string(),
            age: 25,
            phone_number: "0851234567".to_string(),
            email: "demo@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(ApplicationValidator::validate(&valid_input()), Ok(()));
    }

    #[test]
    fn test_missing_fields_message() {
        let error = ValidationError::MissingFields(vec!["age", "phoneNumber", "email"]);
        assert_eq!(
            error.to_string(),
            "missing required fields: age, phoneNumber, email"
        );
    }

    #[test]
    fn test_business_is_structurally_valid() {
        let input = ApplicantInput {
            loan_purpose: "business".to_string(),
            ..valid_input()
        };
        assert!(ApplicationValidator::validate(&input).is_ok());
    }

    #[test]
    fn test_age_has_no_upper_bound() {
        let input = ApplicantInput {
            age: 120,
            ..valid_input()
        };
        assert!(ApplicationValidator::validate(&input).is_ok());
    }

    #[test]
    fn test_phone_number_shapes() {
        assert!(is_valid_phone_number("0851234567"));
        assert!(!is_valid_phone_number("085123456"));
        assert!(!is_valid_phone_number("08512345678"));
        assert!(!is_valid_phone_number("085-123456"));
        assert!(!is_valid_phone_number("０８５１２３４５６７"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("demo@example.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.example.co"));
        assert!(!is_valid_email("demoexample.com"));
        assert!(!is_valid_email("demo@example.c"));
        assert!(!is_valid_email("demo@example"));
        assert!(!is_valid_email("de mo@example.com"));
    }
}
