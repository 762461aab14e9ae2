use thiserror::Error;

/// Error for bearer token issuance, resolution and revocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token not found")]
    NotFound,

    #[error("Token has expired")]
    Expired,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
