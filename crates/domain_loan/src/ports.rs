//! Loan Application Store Port
//!
//! This module defines the port the workflows use to persist and read
//! applications, so the backing store can be swapped without touching the
//! business logic.
//!
//! # Architecture
//!
//! - **Internal Adapter**: PostgreSQL (`infra_db::adapters::PostgresLoanApplicationAdapter`)
//! - **Mock Adapter**: In-memory map for tests, behind the `mock` feature
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_loan::{LoanApplicationPort, InquiryWorkflow};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn LoanApplicationPort> = Arc::new(PostgresLoanApplicationAdapter::new(pool));
//! let inquiry = InquiryWorkflow::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{
    ApplicationId, DomainPort, HealthCheckable, OperationMetadata, Page, PageRequest, PortError,
};

use crate::application::LoanApplication;

/// Query parameters for listing applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationQuery {
    /// Only return applications with this purpose; `None` returns all
    pub purpose: Option<String>,
    /// Page size and row offset
    pub page: PageRequest,
}

impl ApplicationQuery {
    /// Creates a query, treating an empty purpose as no filter
    pub fn new(purpose: Option<String>, page: PageRequest) -> Self {
        Self {
            purpose: purpose.filter(|p| !p.is_empty()),
            page,
        }
    }

    /// Returns true if the application passes the purpose filter
    pub fn matches(&self, application: &LoanApplication) -> bool {
        self.purpose
            .as_deref()
            .map_or(true, |purpose| application.loan_purpose == purpose)
    }
}

/// The store port for loan applications
///
/// Implementations issue a single insert per create and a single read per
/// lookup; consistency of concurrent writes is the store's concern.
#[async_trait]
pub trait LoanApplicationPort: DomainPort + HealthCheckable {
    /// Persists a new application
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the id already exists, or any store failure
    async fn create_application(
        &self,
        application: &LoanApplication,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Retrieves an application by id
    ///
    /// # Returns
    ///
    /// The application if found, or `PortError::NotFound`
    async fn get_application(
        &self,
        id: ApplicationId,
        metadata: Option<OperationMetadata>,
    ) -> Result<LoanApplication, PortError>;

    /// Lists applications matching the purpose filter
    ///
    /// Results are ordered by creation time, then id. The returned total
    /// counts every match regardless of limit and offset.
    async fn list_applications(
        &self,
        query: ApplicationQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Page<LoanApplication>, PortError>;
}

/// Mock implementation of LoanApplicationPort for testing
///
/// Stores applications in memory and can be told to fail every call, which
/// lets tests reach the server-error paths without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of LoanApplicationPort
    #[derive(Debug, Default, Clone)]
    pub struct MockLoanApplicationPort {
        applications: Arc<RwLock<HashMap<ApplicationId, LoanApplication>>>,
        failure: Arc<RwLock<Option<String>>>,
    }

    impl MockLoanApplicationPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with applications for testing
        pub async fn with_applications(applications: Vec<LoanApplication>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.applications.write().await;
                for application in applications {
                    stored.insert(application.id, application);
                }
            }
            port
        }

        /// Makes every subsequent call fail with an internal error
        pub async fn fail_with(&self, message: impl Into<String>) {
            *self.failure.write().await = Some(message.into());
        }

        /// Number of stored applications
        pub async fn application_count(&self) -> usize {
            self.applications.read().await.len()
        }

        async fn check_failure(&self) -> Result<(), PortError> {
            match self.failure.read().await.as_ref() {
                Some(message) => Err(PortError::internal(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockLoanApplicationPort {}

    #[async_trait]
    impl HealthCheckable for MockLoanApplicationPort {
        async fn health_check(&self) -> HealthCheckResult {
            let failure = self.failure.read().await.clone();
            HealthCheckResult {
                adapter_id: "mock-loan-application-port".to_string(),
                status: if failure.is_some() {
                    AdapterHealth::Unhealthy
                } else {
                    AdapterHealth::Healthy
                },
                latency_ms: 0,
                message: failure,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl LoanApplicationPort for MockLoanApplicationPort {
        async fn create_application(
            &self,
            application: &LoanApplication,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.check_failure().await?;
            let mut applications = self.applications.write().await;
            if applications.contains_key(&application.id) {
                return Err(PortError::conflict(format!(
                    "application {} already exists",
                    application.id
                )));
            }
            applications.insert(application.id, application.clone());
            Ok(())
        }

        async fn get_application(
            &self,
            id: ApplicationId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<LoanApplication, PortError> {
            self.check_failure().await?;
            self.applications
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("LoanApplication", id.as_uuid()))
        }

        async fn list_applications(
            &self,
            query: ApplicationQuery,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Page<LoanApplication>, PortError> {
            self.check_failure().await?;
            let applications = self.applications.read().await;
            let mut matching: Vec<_> = applications
                .values()
                .filter(|a| query.matches(a))
                .cloned()
                .collect();
            matching.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

            Ok(Page::from_slice(matching, query.page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockLoanApplicationPort;
    use crate::application::ApplicantInput;
    use chrono::{Duration, TimeZone, Utc};

    fn application(purpose: &str, minutes: i64) -> LoanApplication {
        let created_at = Utc.with_ymd_and_hms(2025, 7, 19, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        LoanApplication::new(
            ApplicationId::new(),
            ApplicantInput {
                full_name: "Jane Doe".to_string(),
                monthly_income: 20_000,
                loan_amount: 50_000,
                loan_purpose: purpose.to_string(),
                age: 30,
                phone_number: "0851234567".to_string(),
                email: "jane@example.com".to_string(),
            },
            created_at,
        )
    }

    #[test]
    fn test_empty_purpose_means_no_filter() {
        let query = ApplicationQuery::new(Some(String::new()), PageRequest::new(10, 0).unwrap());
        assert_eq!(query.purpose, None);
        assert!(query.matches(&application("car", 0)));
    }

    #[tokio::test]
    async fn test_mock_port_create_and_get() {
        let port = MockLoanApplicationPort::new();
        let app = application("home", 0);

        port.create_application(&app, None).await.unwrap();

        let retrieved = port.get_application(app.id, None).await.unwrap();
        assert_eq!(retrieved, app);
    }

    #[tokio::test]
    async fn test_mock_port_rejects_duplicate_id() {
        let port = MockLoanApplicationPort::new();
        let app = application("home", 0);

        port.create_application(&app, None).await.unwrap();
        let result = port.create_application(&app, None).await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_mock_port_not_found() {
        let port = MockLoanApplicationPort::new();
        let result = port.get_application(ApplicationId::new(), None).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_port_lists_in_creation_order() {
        let port = MockLoanApplicationPort::with_applications(vec![
            application("car", 2),
            application("home", 0),
            application("car", 1),
        ])
        .await;

        let query = ApplicationQuery::new(Some("car".to_string()), PageRequest::new(10, 0).unwrap());
        let page = port.list_applications(query, None).await.unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items[0].created_at < page.items[1].created_at);
        assert!(page.items.iter().all(|a| a.loan_purpose == "car"));
    }

    #[tokio::test]
    async fn test_mock_port_failure_injection() {
        let port = MockLoanApplicationPort::new();
        port.fail_with("disk on fire").await;

        let result = port.get_application(ApplicationId::new(), None).await;
        assert!(matches!(result, Err(PortError::Internal { .. })));
        assert!(!port.health_check().await.is_operational());
    }
}
