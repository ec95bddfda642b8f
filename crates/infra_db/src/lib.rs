//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL persistence for loan applications using
//! SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `repositories` owns the SQL and
//! row types, `adapters` implements the domain's `LoanApplicationPort` on
//! top of a repository and translates errors into `PortError`.
//!
//! The schema holds only applicant fields and the creation timestamp.
//! Eligibility is never stored.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations};
//! use infra_db::adapters::PostgresLoanApplicationAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/loans")).await?;
//! run_migrations(&pool).await?;
//! let adapter = PostgresLoanApplicationAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use adapters::PostgresLoanApplicationAdapter;
