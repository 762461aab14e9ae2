use async_trait::async_trait;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::AuthToken;

/// Persistence operations for bearer tokens, keyed by token digest.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist a newly issued token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (including a digest collision)
    async fn create(&self, token: AuthToken) -> Result<AuthToken, TokenError>;

    /// Retrieve a token by the digest of its plain text value.
    ///
    /// # Returns
    /// Optional token (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_digest(&self, digest: &str) -> Result<Option<AuthToken>, TokenError>;

    /// Remove a token by digest.
    ///
    /// # Errors
    /// * `NotFound` - No token with this digest
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_digest(&self, digest: &str) -> Result<(), TokenError>;
}
