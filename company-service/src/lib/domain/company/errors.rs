use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Error for CompanyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for company operations.
#[derive(Debug, Clone, Error)]
pub enum CompanyError {
    #[error("The given data was invalid")]
    Validation(ValidationErrors),

    #[error("Company not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
