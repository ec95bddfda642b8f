//! Eligibility rules
//!
//! Four base rules, checked in a fixed order; the first one that fails
//! decides the verdict:
//!
//! 1. Monthly income of at least 10,000
//! 2. Age between 20 and 60 inclusive
//! 3. Purpose other than `business`
//! 4. Loan amount no more than 12 months of income
//!
//! The evaluation is pure. The intake workflow calls it before persisting
//! and the inquiry workflow calls it again after every read; the verdict is
//! never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum monthly income accepted by the base rules
pub const MIN_MONTHLY_INCOME: i64 = 10_000;

/// Youngest eligible applicant age
pub const MIN_AGE: i64 = 20;

/// Oldest eligible applicant age
pub const MAX_AGE: i64 = 60;

/// Purpose that the base rules decline outright
pub const UNSUPPORTED_PURPOSE: &str = "business";

/// Maximum loan amount expressed in months of income
pub const MAX_INCOME_MULTIPLE: i64 = 12;

/// Why an application was accepted or declined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityReason {
    IncomeInsufficient,
    AgeOutOfRange,
    BusinessPurpose,
    AmountExceedsCap,
    Eligible,
}

impl EligibilityReason {
    /// Returns the client-facing reason text
    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityReason::IncomeInsufficient => "Monthly income is insufficient",
            EligibilityReason::AgeOutOfRange => "Age not in range (must be between 20-60)",
            EligibilityReason::BusinessPurpose => "Business loans not supported",
            EligibilityReason::AmountExceedsCap => "Loan amount cannot exceed 12 months of income",
            EligibilityReason::Eligible => "Eligible under base rules",
        }
    }
}

impl fmt::Display for EligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the base rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reason: EligibilityReason,
}

impl EligibilityVerdict {
    fn declined(reason: EligibilityReason) -> Self {
        Self { eligible: false, reason }
    }

    fn approved() -> Self {
        Self {
            eligible: true,
            reason: EligibilityReason::Eligible,
        }
    }
}

/// Applies the base rules to the four business fields
///
/// # Example
///
/// ```rust
/// use domain_loan::eligibility::{evaluate, EligibilityReason};
///
/// let verdict = evaluate(11_000, 25, "home", 120_000);
/// assert!(verdict.eligible);
/// assert_eq!(verdict.reason, EligibilityReason::Eligible);
/// ```
pub fn evaluate(
    monthly_income: i64,
    age: i64,
    loan_purpose: &str,
    loan_amount: i64,
) -> EligibilityVerdict {
    if monthly_income < MIN_MONTHLY_INCOME {
        return EligibilityVerdict::declined(EligibilityReason::IncomeInsufficient);
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return EligibilityVerdict::declined(EligibilityReason::AgeOutOfRange);
    }
    if loan_purpose == UNSUPPORTED_PURPOSE {
        return EligibilityVerdict::declined(EligibilityReason::BusinessPurpose);
    }
    if loan_amount > monthly_income.saturating_mul(MAX_INCOME_MULTIPLE) {
        return EligibilityVerdict::declined(EligibilityReason::AmountExceedsCap);
    }
    EligibilityVerdict::approved()
}
