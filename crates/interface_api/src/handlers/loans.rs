//! Loan application handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    Json,
};
use tracing::warn;

use core_kernel::PageRequest;
use domain_loan::ApplicantInput;

use crate::dto::loan::*;
use crate::{error::ApiError, operation_metadata, AppState};

/// Submits a new loan application
///
/// Responds 200 whether or not the applicant is eligible.
pub async fn create_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ApplicantInput>, JsonRejection>,
) -> Result<Json<CreateLoanResponse>, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Unreadable loan application body");
        ApiError::from(rejection)
    })?;

    let decision = state
        .create
        .submit(input, operation_metadata(&headers))
        .await?;

    Ok(Json(decision.into()))
}

/// Gets an application by id
pub async fn get_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let view = state
        .inquiry
        .get_application(&application_id, operation_metadata(&headers))
        .await?;

    Ok(Json(view.into()))
}

/// Lists applications filtered by purpose
///
/// `limit` must be at least 1 and `page` is the row offset.
pub async fn list_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ListApplicationsParams>, QueryRejection>,
) -> Result<Json<ListApplicationsResponse>, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Unreadable query string");
        ApiError::from(rejection)
    })?;
    let limit = parse_param("limit", params.limit.as_deref())?;
    let page = parse_param("page", params.page.as_deref())?;
    let request = PageRequest::new(limit, page)
        .ok_or_else(|| ApiError::invalid_parameter("limit", "limit must be at least 1"))?;

    let listing = state
        .inquiry
        .list_applications(params.purpose, request, operation_metadata(&headers))
        .await?;

    Ok(Json(ListApplicationsResponse::new(listing, page)))
}

fn parse_param(name: &'static str, raw: Option<&str>) -> Result<u32, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::invalid_parameter(name, "parameter is required"))?;
    raw.parse::<u32>().map_err(|e| {
        warn!(parameter = name, value = raw, "Rejected query parameter");
        ApiError::invalid_parameter(name, format!("'{}': {}", raw, e))
    })
}
