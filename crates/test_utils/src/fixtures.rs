//! Pre-built Test Fixtures
//!
//! Applicant inputs for the scenarios every layer is tested against. All of
//! them derive from one baseline applicant who passes validation and every
//! eligibility rule.

use chrono::{DateTime, TimeZone, Utc};
use domain_loan::ApplicantInput;

/// Fixture for applicant inputs
pub struct ApplicantFixtures;

impl ApplicantFixtures {
    /// Jane Doe: income 11,000, asking 120,000 for a home, age 25
    pub fn eligible() -> ApplicantInput {
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

    /// Baseline without age, phone number, or email
    pub fn missing_contact_details() -> ApplicantInput {
        ApplicantInput {
            age: 0,
            phone_number: String::new(),
            email: String::new(),
            ..Self::eligible()
        }
    }

    /// Baseline with an email that has no `@`
    pub fn malformed_email() -> ApplicantInput {
        ApplicantInput {
            email: "demoexample.com".to_string(),
            ..Self::eligible()
        }
    }

    /// Income 9,000 asking 5,000: valid, but declined on income
    pub fn low_income() -> ApplicantInput {
        ApplicantInput {
            monthly_income: 9_000,
            loan_amount: 5_000,
            ..Self::eligible()
        }
    }

    /// Valid input for a business loan, which the rules decline
    pub fn business_purpose() -> ApplicantInput {
        ApplicantInput {
            loan_purpose: "business".to_string(),
            ..Self::eligible()
        }
    }

    /// Valid input from an applicant older than the eligible range
    pub fn over_age() -> ApplicantInput {
        ApplicantInput {
            age: 61,
            ..Self::eligible()
        }
    }

    /// Asks for one more than twelve months of income
    pub fn over_cap() -> ApplicantInput {
        ApplicantInput {
            loan_amount: 132_001,
            ..Self::eligible()
        }
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed reference instant (2025-07-19 09:00 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 19, 9, 0, 0).unwrap()
    }
}
