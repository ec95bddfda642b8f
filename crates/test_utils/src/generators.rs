//! Property-Based Test Generators
//!
//! Provides proptest strategies for applicant inputs. `valid_applicant`
//! always passes validation; `eligible_applicant` additionally passes every
//! eligibility rule.

use domain_loan::ApplicantInput;
use proptest::prelude::*;

/// Strategy for any purpose validation accepts
pub fn purpose_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("home".to_string()),
        Just("car".to_string()),
        Just("education".to_string()),
        Just("personal".to_string()),
        Just("business".to_string()),
    ]
}

/// Strategy for purposes the eligibility rules accept
pub fn approvable_purpose_strategy() -> impl Strategy<Value = String> {
    purpose_strategy().prop_filter("business is declined", |p| p != "business")
}

/// Strategy for ten-digit phone numbers
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

/// Strategy for well-formed email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._]{1,12}@[a-z]{1,10}\\.(com|org|net|co\\.th)"
}

/// Strategy for names within the accepted length
pub fn full_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,20}( [A-Z][a-z]{1,20})?"
}

/// Strategy for inputs that pass validation, eligible or not
pub fn valid_applicant_strategy() -> impl Strategy<Value = ApplicantInput> {
    (
        full_name_strategy(),
        5_000i64..=5_000_000,
        1_000i64..=5_000_000,
        purpose_strategy(),
        1i64..=100,
        phone_number_strategy(),
        email_strategy(),
    )
        .prop_map(
            |(full_name, monthly_income, loan_amount, loan_purpose, age, phone_number, email)| {
                ApplicantInput {
                    full_name,
                    monthly_income,
                    loan_amount,
                    loan_purpose,
                    age,
                    phone_number,
                    email,
                }
            },
        )
}

/// Strategy for inputs that pass validation and every eligibility rule
pub fn eligible_applicant_strategy() -> impl Strategy<Value = ApplicantInput> {
    (10_000i64..=5_000_000)
        .prop_flat_map(|income| {
            let max_amount = (income * 12).min(5_000_000);
            (
                Just(income),
                1_000i64..=max_amount,
                20i64..=60,
                approvable_purpose_strategy(),
                valid_applicant_strategy(),
            )
        })
        .prop_map(|(monthly_income, loan_amount, age, loan_purpose, base)| ApplicantInput {
            monthly_income,
            loan_amount,
            age,
            loan_purpose,
            ..base
        })
}
