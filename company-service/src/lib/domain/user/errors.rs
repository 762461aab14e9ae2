use thiserror::Error;

use crate::domain::token::errors::TokenError;
use crate::domain::validation::ValidationErrors;

/// Top-level error for registration, login and token resolution.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("The given data was invalid")]
    Validation(ValidationErrors),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    /// Unknown email and wrong password deliberately share this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(TokenError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TokenError> for UserError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::DatabaseError(msg) => UserError::DatabaseError(msg),
            other => UserError::Unauthenticated(other),
        }
    }
}
