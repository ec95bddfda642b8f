//! Test Data Builders
//!
//! Builders start from the eligible baseline applicant so that tests only
//! spell out the fields they care about.

use chrono::{DateTime, Duration, Utc};
use core_kernel::ApplicationId;
use domain_loan::{ApplicantInput, LoanApplication};

use crate::fixtures::{ApplicantFixtures, TemporalFixtures};

/// Builder for applicant inputs
#[derive(Debug, Clone)]
pub struct ApplicantInputBuilder {
    input: ApplicantInput,
}

impl Default for ApplicantInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicantInputBuilder {
    /// Creates a builder seeded with the eligible baseline
    pub fn new() -> Self {
        Self {
            input: ApplicantFixtures::eligible(),
        }
    }

    pub fn with_loan_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.input.loan_purpose = purpose.into();
        self
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.input.age = age;
        self
    }

    pub fn build(self) -> ApplicantInput {
        self.input
    }
}

/// Builder for stored application records
///
/// Each call to `build_many` spaces the records one minute apart so their
/// listing order is predictable.
#[derive(Debug, Clone)]
pub struct LoanApplicationBuilder {
    id: Option<ApplicationId>,
    input: ApplicantInput,
    created_at: DateTime<Utc>,
}

impl Default for LoanApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanApplicationBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            input: ApplicantFixtures::eligible(),
            created_at: TemporalFixtures::submitted_at(),
        }
    }

    pub fn with_id(mut self, id: ApplicationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_input(mut self, input: ApplicantInput) -> Self {
        self.input = input;
        self
    }

    pub fn with_loan_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.input.loan_purpose = purpose.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> LoanApplication {
        LoanApplication::new(
            self.id.unwrap_or_else(ApplicationId::new),
            self.input,
            self.created_at,
        )
    }

    /// Builds `count` records with fresh ids and increasing timestamps
    pub fn build_many(self, count: usize) -> Vec<LoanApplication> {
        (0..count)
            .map(|i| {
                self.clone()
                    .with_id(ApplicationId::new())
                    .with_created_at(self.created_at + Duration::minutes(i as i64))
                    .build()
            })
            .collect()
    }
}
