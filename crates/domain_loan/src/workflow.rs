//! Application intake and inquiry workflows
//!
//! Both workflows run the same eligibility evaluation: intake runs it before
//! persisting to decide the response, inquiry runs it again on every record
//! it reads back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument, warn};

use core_kernel::{ApplicationId, OperationMetadata, PageRequest};

use crate::application::{ApplicantInput, ApplicationView, LoanApplication};
use crate::eligibility::EligibilityVerdict;
use crate::error::LoanError;
use crate::ports::{ApplicationQuery, LoanApplicationPort};
use crate::validation::ApplicationValidator;

/// Result of a successful submission
///
/// A declined application is still a successful submission; the verdict
/// carries the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDecision {
    pub application_id: ApplicationId,
    pub created_at: DateTime<Utc>,
    pub verdict: EligibilityVerdict,
}

/// One page of applications with their recomputed verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationListing {
    pub applications: Vec<ApplicationView>,
    /// Number of applications matching the filter
    pub total: u64,
    /// `total / limit`, truncated
    pub total_pages: u64,
}

/// Validates, evaluates, and persists new applications
#[derive(Clone)]
pub struct CreateApplicationWorkflow {
    port: Arc<dyn LoanApplicationPort>,
}

impl CreateApplicationWorkflow {
    pub fn new(port: Arc<dyn LoanApplicationPort>) -> Self {
        Self { port }
    }

    /// Submits an application
    ///
    /// Both eligible and ineligible applications are stored.
    ///
    /// # Errors
    ///
    /// - `LoanError::Validation` if the input is malformed; nothing is stored
    /// - `LoanError::Store` if persisting fails
    #[instrument(skip_all)]
    pub async fn submit(
        &self,
        input: ApplicantInput,
        metadata: Option<OperationMetadata>,
    ) -> Result<ApplicationDecision, LoanError> {
        if let Err(violation) = ApplicationValidator::validate(&input) {
            warn!(reason = %violation, "Rejected loan application input");
            return Err(violation.into());
        }

        let application_id = ApplicationId::new();
        let created_at = Utc::now();
        let verdict = input.eligibility();
        let application = LoanApplication::new(application_id, input, created_at);

        self.port
            .create_application(&application, metadata)
            .await
            .map_err(|e| {
                error!(application_id = %application_id, error = %e, "Failed to persist loan application");
                LoanError::Store(e)
            })?;

        info!(
            application_id = %application_id,
            eligible = verdict.eligible,
            reason = %verdict.reason,
            "Loan application recorded"
        );

        Ok(ApplicationDecision {
            application_id,
            created_at,
            verdict,
        })
    }
}

/// Reads stored applications and re-evaluates them
#[derive(Clone)]
pub struct InquiryWorkflow {
    port: Arc<dyn LoanApplicationPort>,
}

impl InquiryWorkflow {
    pub fn new(port: Arc<dyn LoanApplicationPort>) -> Self {
        Self { port }
    }

    /// Looks up one application by the id the caller supplied
    ///
    /// An id that does not parse can never be stored, so it is reported as
    /// not found rather than as malformed input.
    #[instrument(skip(self, metadata))]
    pub async fn get_application(
        &self,
        raw_id: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<ApplicationView, LoanError> {
        let Ok(id) = raw_id.parse::<ApplicationId>() else {
            debug!("Application id is not a UUID");
            return Err(LoanError::not_found(raw_id));
        };

        match self.port.get_application(id, metadata).await {
            Ok(application) => Ok(ApplicationView::from(application)),
            Err(e) if e.is_not_found() => Err(LoanError::not_found(raw_id)),
            Err(e) => {
                error!(application_id = %id, error = %e, "Failed to load loan application");
                Err(LoanError::Store(e))
            }
        }
    }

    /// Lists applications, optionally filtered by purpose
    #[instrument(skip(self, metadata))]
    pub async fn list_applications(
        &self,
        purpose: Option<String>,
        page: PageRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<ApplicationListing, LoanError> {
        let query = ApplicationQuery::new(purpose, page);
        let result = self
            .port
            .list_applications(query, metadata)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list loan applications");
                LoanError::Store(e)
            })?;

        let total = result.total;
        let applications = result.map(ApplicationView::from).items;

        Ok(ApplicationListing {
            applications,
            total,
            total_pages: page.total_pages(total),
        })
    }
}
