//! PostgreSQL Loan Application Adapter
//!
//! Implements `LoanApplicationPort` on top of `LoanApplicationRepository`,
//! converting between rows and domain records and translating database
//! errors into `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresLoanApplicationAdapter;
//! use domain_loan::LoanApplicationPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn LoanApplicationPort> =
//!     Arc::new(PostgresLoanApplicationAdapter::new(pool));
//! let application = port.get_application(id, None).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, ApplicationId, DomainPort, HealthCheckResult, HealthCheckable,
    OperationMetadata, Page, PortError,
};
use domain_loan::{ApplicationQuery, LoanApplication, LoanApplicationPort};

use crate::repositories::loan_application::{LoanApplicationRepository, LoanApplicationRow};

const ADAPTER_ID: &str = "postgres-loan-application-adapter";

/// PostgreSQL-backed implementation of the LoanApplicationPort trait
///
/// Health checks run `SELECT 1` against the pool.
#[derive(Debug, Clone)]
pub struct PostgresLoanApplicationAdapter {
    repository: LoanApplicationRepository,
    pool: PgPool,
}

impl PostgresLoanApplicationAdapter {
    /// Creates a new PostgreSQL loan application adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LoanApplicationRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresLoanApplicationAdapter {}

#[async_trait]
impl HealthCheckable for PostgresLoanApplicationAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (
                AdapterHealth::Unhealthy,
                Some(format!("Database error: {}", e)),
            ),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl LoanApplicationPort for PostgresLoanApplicationAdapter {
    #[instrument(skip(self, application, metadata), fields(application_id = %application.id))]
    async fn create_application(
        &self,
        application: &LoanApplication,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        log_correlation(&metadata);
        let row = LoanApplicationRow::from(application);
        self.repository.insert(&row).await.map_err(PortError::from)
    }

    #[instrument(skip(self, metadata), fields(application_id = %id))]
    async fn get_application(
        &self,
        id: ApplicationId,
        metadata: Option<OperationMetadata>,
    ) -> Result<LoanApplication, PortError> {
        log_correlation(&metadata);
        let row = self.repository.get_by_id(*id.as_uuid()).await?;
        Ok(row.into())
    }

    #[instrument(skip(self, metadata), fields(purpose = ?query.purpose, limit = query.page.limit, offset = query.page.offset))]
    async fn list_applications(
        &self,
        query: ApplicationQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Page<LoanApplication>, PortError> {
        log_correlation(&metadata);
        let (rows, total) = self
            .repository
            .list(
                query.purpose.as_deref(),
                i64::from(query.page.limit),
                i64::from(query.page.offset),
            )
            .await?;

        Ok(Page::new(rows.into_iter().map(Into::into).collect(), total))
    }
}

fn log_correlation(metadata: &Option<OperationMetadata>) {
    if let Some(meta) = metadata {
        debug!(correlation_id = ?meta.correlation_id, "Store call");
    }
}

impl From<&LoanApplication> for LoanApplicationRow {
    fn from(application: &LoanApplication) -> Self {
        Self {
            application_id: *application.id.as_uuid(),
            full_name: application.full_name.clone(),
            monthly_income: application.monthly_income,
            loan_amount: application.loan_amount,
            loan_purpose: application.loan_purpose.clone(),
            age: application.age,
            phone_number: application.phone_number.clone(),
            email: application.email.clone(),
            created_at: application.created_at,
        }
    }
}

impl From<LoanApplicationRow> for LoanApplication {
    fn from(row: LoanApplicationRow) -> Self {
        Self {
            id: ApplicationId::from_uuid(row.application_id),
            full_name: row.full_name,
            monthly_income: row.monthly_income,
            loan_amount: row.loan_amount,
            loan_purpose: row.loan_purpose,
            age: row.age,
            phone_number: row.phone_number,
            email: row.email,
            created_at: row.created_at,
        }
    }
}
