//! Custom Test Assertions
//!
//! Verdict assertions with messages that name the applicant fields, which
//! makes property-test failures readable.

use domain_loan::{ApplicantInput, ApplicationValidator, EligibilityReason};

/// Asserts the input is eligible under the base rules
///
/// # Panics
///
/// Panics with the declining reason if the input is not eligible
pub fn assert_eligible(input: &ApplicantInput) {
    let verdict = input.eligibility();
    assert!(
        verdict.eligible,
        "Expected eligible, got '{}' for income={} age={} purpose={} amount={}",
        verdict.reason, input.monthly_income, input.age, input.loan_purpose, input.loan_amount
    );
    assert_eq!(verdict.reason, EligibilityReason::Eligible);
}

/// Asserts the input is declined for exactly `reason`
pub fn assert_declined(input: &ApplicantInput, reason: EligibilityReason) {
    let verdict = input.eligibility();
    assert!(
        !verdict.eligible,
        "Expected decline ({}), got eligible for income={} age={} purpose={} amount={}",
        reason, input.monthly_income, input.age, input.loan_purpose, input.loan_amount
    );
    assert_eq!(verdict.reason, reason, "Wrong decline reason");
}

/// Asserts the input passes validation
pub fn assert_valid(input: &ApplicantInput) {
    if let Err(e) = ApplicationValidator::validate(input) {
        panic!("Expected valid input, got '{}' for {:?}", e, input);
    }
}

/// Asserts validation fails with the given message
pub fn assert_invalid(input: &ApplicantInput, message: &str) {
    match ApplicationValidator::validate(input) {
        Ok(()) => panic!("Expected '{}', but input was valid: {:?}", message, input),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}
