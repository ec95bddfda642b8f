//! Loan application model
//!
//! `ApplicantInput` is what arrives over the wire, before any checks run.
//! `LoanApplication` is the persisted record: the seven applicant fields
//! plus an id and a creation timestamp, both fixed at creation time.
//!
//! Neither type carries an eligibility flag. The verdict is always
//! recomputed from the fields, so a change to the rules reclassifies
//! existing records the next time they are read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::ApplicationId;

use crate::eligibility::{self, EligibilityVerdict};

/// Raw applicant fields as submitted
///
/// Absent or `null` JSON fields deserialize to zero or the empty string,
/// which the presence check then reports as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantInput {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    /// Monthly income in whole currency units
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_income: i64,
    /// Requested amount in whole currency units
    #[serde(deserialize_with = "null_as_default")]
    pub loan_amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub loan_purpose: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ApplicantInput {
    /// Runs the eligibility rules against these fields
    pub fn eligibility(&self) -> EligibilityVerdict {
        eligibility::evaluate(
            self.monthly_income,
            self.age,
            &self.loan_purpose,
            self.loan_amount,
        )
    }
}

/// A loan application as owned by the store
///
/// Created once by the intake workflow and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: ApplicationId,
    pub full_name: String,
    pub monthly_income: i64,
    pub loan_amount: i64,
    pub loan_purpose: String,
    pub age: i64,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl LoanApplication {
    /// Builds a record from validated input
    pub fn new(id: ApplicationId, input: ApplicantInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: input.full_name,
            monthly_income: input.monthly_income,
            loan_amount: input.loan_amount,
            loan_purpose: input.loan_purpose,
            age: input.age,
            phone_number: input.phone_number,
            email: input.email,
            created_at,
        }
    }

    /// Recomputes the eligibility verdict from the stored fields
    pub fn eligibility(&self) -> EligibilityVerdict {
        eligibility::evaluate(
            self.monthly_income,
            self.age,
            &self.loan_purpose,
            self.loan_amount,
        )
    }
}

/// A stored record paired with its freshly computed verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationView {
    pub application: LoanApplication,
    pub verdict: EligibilityVerdict,
}

impl From<LoanApplication> for ApplicationView {
    fn from(application: LoanApplication) -> Self {
        let verdict = application.eligibility();
        Self { application, verdict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_json_fields_default_to_zero() {
        let input: ApplicantInput =
            serde_json::from_str(r#"{"fullName":"Jane Doe","monthlyIncome":5000}"#).unwrap();
        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.monthly_income, 5000);
        assert_eq!(input.age, 0);
        assert!(input.email.is_empty());
    }

    #[test]
    fn test_null_json_fields_default_to_zero() {
        let input: ApplicantInput = serde_json::from_str(
            r#"{"fullName":"Jane Doe","monthlyIncome":null,"age":null,"phoneNumber":null,"email":null}"#,
        )
        .unwrap();
        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.monthly_income, 0);
        assert_eq!(input.age, 0);
        assert!(input.phone_number.is_empty());
        assert!(input.email.is_empty());
    }

    #[test]
    fn test_record_and_input_agree_on_verdict() {
        let input = ApplicantInput {
            full_name: "Jane Doe".to_string(),
            monthly_income: 9000,
            loan_amount: 5000,
            loan_purpose: "home".to_string(),
            age: 25,
            phone_number: "0851234567".to_string(),
            email: "demo@example.com".to_string(),
        };
        let verdict = input.eligibility();
        let record = LoanApplication::new(ApplicationId::new(), input, Utc::now());

        assert_eq!(record.eligibility(), verdict);
        assert_eq!(ApplicationView::from(record).verdict, verdict);
    }
}
