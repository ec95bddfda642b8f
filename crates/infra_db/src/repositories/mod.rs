//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Queries are checked at runtime so the crate builds without
//! a live database.

pub mod loan_application;

pub use loan_application::LoanApplicationRepository;
