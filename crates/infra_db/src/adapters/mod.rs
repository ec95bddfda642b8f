//! Domain Adapters
//!
//! Adapter implementations that connect domain ports to PostgreSQL.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresLoanApplicationAdapter;
//! use domain_loan::LoanApplicationPort;
//!
//! let adapter = PostgresLoanApplicationAdapter::new(pool);
//! let application = adapter.get_application(id, None).await?;
//! ```

pub mod loan_application;

pub use loan_application::PostgresLoanApplicationAdapter;
