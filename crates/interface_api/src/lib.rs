//! HTTP API Layer
//!
//! This crate provides the REST API for the loan pre-approval service using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: submission, lookup, listing, and health checks
//! - **Middleware**: request ids, tracing, audit logging, CORS
//! - **DTOs**: camelCase request/response bodies
//! - **Error Handling**: `{message, reason}` error bodies
//!
//! Handlers hold no business logic; they call the domain workflows through
//! `AppState`, which is built around any `LoanApplicationPort`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let port = Arc::new(PostgresLoanApplicationAdapter::new(pool));
//! let app = create_router(port, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::{HeaderMap, HeaderName},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::OperationMetadata;
use domain_loan::{CreateApplicationWorkflow, InquiryWorkflow, LoanApplicationPort};

use crate::config::ApiConfig;
use crate::handlers::{health, loans};
use crate::middleware::audit_middleware;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub create: CreateApplicationWorkflow,
    pub inquiry: InquiryWorkflow,
    pub port: Arc<dyn LoanApplicationPort>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(port: Arc<dyn LoanApplicationPort>, config: ApiConfig) -> Self {
        Self {
            create: CreateApplicationWorkflow::new(port.clone()),
            inquiry: InquiryWorkflow::new(port.clone()),
            port,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `port` - Application store
/// * `config` - API configuration
pub fn create_router(port: Arc<dyn LoanApplicationPort>, config: ApiConfig) -> Router {
    let state = AppState::new(port, config);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route(
            "/loans",
            get(loans::list_applications).post(loans::create_application),
        )
        .route("/loans/:applicationId", get(loans::get_application))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

/// Builds store-call metadata from the request id header
pub fn operation_metadata(headers: &HeaderMap) -> Option<OperationMetadata> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(OperationMetadata::with_correlation_id)
}
