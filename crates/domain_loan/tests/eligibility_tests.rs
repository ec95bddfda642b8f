//! Eligibility Rule Tests
//!
//! Covers each base rule in isolation, the precedence between rules when
//! several fail at once, and property checks over the approvable region.

use domain_loan::eligibility::{evaluate, EligibilityReason, EligibilityVerdict};
use domain_loan::ApplicantInput;
use proptest::prelude::*;

fn declined(reason: EligibilityReason) -> EligibilityVerdict {
    EligibilityVerdict { eligible: false, reason }
}

// ============================================================================
// Individual rules
// ============================================================================

mod single_rules {
    use super::*;

    #[test]
    fn test_base_case_is_eligible() {
        let verdict = evaluate(11_000, 25, "home", 120_000);
        assert!(verdict.eligible);
        assert_eq!(verdict.reason.as_str(), "Eligible under base rules");
    }

    #[test]
    fn test_low_income_declined() {
        assert_eq!(
            evaluate(9_000, 25, "home", 5_000),
            declined(EligibilityReason::IncomeInsufficient)
        );
        assert_eq!(
            EligibilityReason::IncomeInsufficient.as_str(),
            "Monthly income is insufficient"
        );
    }

    #[test]
    fn test_age_outside_range_declined() {
        for age in [0, 19, 61, 99] {
            assert_eq!(
                evaluate(20_000, age, "car", 10_000),
                declined(EligibilityReason::AgeOutOfRange),
                "age {age}"
            );
        }
        assert_eq!(
            EligibilityReason::AgeOutOfRange.as_str(),
            "Age not in range (must be between 20-60)"
        );
    }

    #[test]
    fn test_business_purpose_declined() {
        assert_eq!(
            evaluate(20_000, 30, "business", 10_000),
            declined(EligibilityReason::BusinessPurpose)
        );
    }

    #[test]
    fn test_purpose_match_is_exact() {
        assert!(evaluate(20_000, 30, "Business", 10_000).eligible);
    }

    #[test]
    fn test_amount_above_twelve_months_declined() {
        assert_eq!(
            evaluate(10_000, 30, "education", 120_001),
            declined(EligibilityReason::AmountExceedsCap)
        );
        assert_eq!(
            EligibilityReason::AmountExceedsCap.as_str(),
            "Loan amount cannot exceed 12 months of income"
        );
    }
}

// ============================================================================
// Rule precedence
// ============================================================================

mod precedence {
    use super::*;

    #[test]
    fn test_income_beats_age() {
        assert_eq!(
            evaluate(9_000, 18, "home", 5_000).reason,
            EligibilityReason::IncomeInsufficient
        );
    }

    #[test]
    fn test_income_beats_everything() {
        assert_eq!(
            evaluate(9_000, 70, "business", 10_000_000).reason,
            EligibilityReason::IncomeInsufficient
        );
    }

    #[test]
    fn test_age_beats_purpose() {
        assert_eq!(
            evaluate(20_000, 65, "business", 10_000).reason,
            EligibilityReason::AgeOutOfRange
        );
    }

    #[test]
    fn test_purpose_beats_amount() {
        assert_eq!(
            evaluate(20_000, 30, "business", 10_000_000).reason,
            EligibilityReason::BusinessPurpose
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn approvable_purpose() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["home", "car", "education", "personal"])
}

proptest! {
    #[test]
    fn all_rules_pass_means_eligible(
        income in 10_000i64..=5_000_000,
        age in 20i64..=60,
        purpose in approvable_purpose(),
        ratio in 0u32..=1_200,
    ) {
        let amount = income * i64::from(ratio) / 100;
        let verdict = evaluate(income, age, purpose, amount);
        prop_assert!(verdict.eligible);
        prop_assert_eq!(verdict.reason, EligibilityReason::Eligible);
    }

    #[test]
    fn evaluation_is_deterministic(
        income in -1_000i64..10_000_000,
        age in -5i64..120,
        purpose in "[a-z]{0,10}",
        amount in -1_000i64..100_000_000,
    ) {
        let first = evaluate(income, age, &purpose, amount);
        let second = evaluate(income, age, &purpose, amount);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn input_eligibility_matches_free_function(
        income in 0i64..1_000_000,
        age in 0i64..100,
        amount in 0i64..20_000_000,
    ) {
        let input = ApplicantInput {
            monthly_income: income,
            age,
            loan_amount: amount,
            loan_purpose: "car".to_string(),
            ..Default::default()
        };
        prop_assert_eq!(input.eligibility(), evaluate(income, age, "car", amount));
    }
}
