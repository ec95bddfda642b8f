//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! loan pre-approval test suite.
//!
//! # Modules
//!
//! - `fixtures`: The canonical applicant scenarios
//! - `builders`: Builder patterns for inputs and stored records
//! - `assertions`: Verdict assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
