//! Loan application DTOs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ApplicationId;
use domain_loan::{ApplicationDecision, ApplicationListing, ApplicationView};

/// Response to a submission, eligible or not
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanResponse {
    pub application_id: ApplicationId,
    pub eligible: bool,
    pub reason: String,
    /// RFC 3339, whole seconds
    pub timestamp: String,
}

impl From<ApplicationDecision> for CreateLoanResponse {
    fn from(decision: ApplicationDecision) -> Self {
        Self {
            application_id: decision.application_id,
            eligible: decision.verdict.eligible,
            reason: decision.verdict.reason.to_string(),
            timestamp: decision.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// A stored application with its recomputed verdict
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub application_id: ApplicationId,
    pub full_name: String,
    pub monthly_income: i64,
    pub loan_amount: i64,
    pub loan_purpose: String,
    pub age: i64,
    pub phone_number: String,
    pub email: String,
    pub eligible: bool,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ApplicationView> for ApplicationResponse {
    fn from(view: ApplicationView) -> Self {
        let ApplicationView { application, verdict } = view;
        Self {
            application_id: application.id,
            full_name: application.full_name,
            monthly_income: application.monthly_income,
            loan_amount: application.loan_amount,
            loan_purpose: application.loan_purpose,
            age: application.age,
            phone_number: application.phone_number,
            email: application.email,
            eligible: verdict.eligible,
            reason: verdict.reason.to_string(),
            timestamp: application.created_at,
        }
    }
}

/// Query string of the list endpoint
///
/// Kept as raw strings so that parse failures produce the API's own error
/// body instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListApplicationsParams {
    pub purpose: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// One page of applications
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsResponse {
    pub applications: Vec<ApplicationResponse>,
    /// The `page` parameter as received
    pub page: u32,
    pub total_pages: u64,
}

impl ListApplicationsResponse {
    pub fn new(listing: ApplicationListing, page: u32) -> Self {
        Self {
            applications: listing.applications.into_iter().map(Into::into).collect(),
            page,
            total_pages: listing.total_pages,
        }
    }
}
