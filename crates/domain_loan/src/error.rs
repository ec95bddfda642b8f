//! Loan domain errors
//!
//! Ineligibility is not represented here: a declined application is a
//! successful outcome carrying a negative verdict.

use thiserror::Error;

use core_kernel::PortError;

use crate::validation::ValidationError;

/// Errors that can occur in the loan workflows
#[derive(Debug, Error)]
pub enum LoanError {
    /// The submission failed structural validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No application exists for the requested id
    #[error("applicationId not found: {0}")]
    NotFound(String),

    /// The store failed for any reason other than a missing record
    #[error("Application store failure: {0}")]
    Store(#[source] PortError),
}

impl LoanError {
    /// Creates a NotFound error from the id as the caller supplied it
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        LoanError::NotFound(id.to_string())
    }

    /// Returns true if the caller's input is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, LoanError::Validation(_) | LoanError::NotFound(_))
    }
}

impl From<PortError> for LoanError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => LoanError::NotFound(id),
            other => LoanError::Store(other),
        }
    }
}
