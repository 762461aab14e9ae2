use std::sync::Arc;

use auth::TokenGenerator;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::AuthToken;
use crate::domain::token::models::TokenId;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::UserId;

/// Label stored with every token issued at login.
pub const TOKEN_NAME: &str = "api_token";

/// Issues, resolves and revokes opaque bearer tokens.
///
/// Each call to `issue` inserts an independent row, so concurrent logins for
/// the same user all succeed and stay individually resolvable.
pub struct TokenIssuer<TR>
where
    TR: TokenRepository,
{
    repository: Arc<TR>,
    generator: TokenGenerator,
    lifetime: Option<Duration>,
}

impl<TR> TokenIssuer<TR>
where
    TR: TokenRepository,
{
    /// # Arguments
    /// * `repository` - Token persistence implementation
    /// * `lifetime` - Validity period of new tokens; `None` keeps them valid until revoked
    pub fn new(repository: Arc<TR>, lifetime: Option<Duration>) -> Self {
        Self {
            repository,
            generator: TokenGenerator::new(),
            lifetime,
        }
    }

    /// Issue a new token for `user_id` and return its plain text value.
    ///
    /// # Errors
    /// * `DatabaseError` - Token could not be stored
    pub async fn issue(&self, user_id: &UserId) -> Result<String, TokenError> {
        let (plain_text, digest) = self.generator.generate().into_parts();
        let now = Utc::now();

        let token = AuthToken {
            id: TokenId::new(),
            user_id: *user_id,
            name: TOKEN_NAME.to_string(),
            digest,
            created_at: now,
            expires_at: self.lifetime.map(|lifetime| now + lifetime),
        };

        self.repository.create(token).await?;
        tracing::debug!(user_id = %user_id, "Bearer token issued");

        Ok(plain_text)
    }

    /// Resolve a presented token to its owner.
    ///
    /// # Errors
    /// * `NotFound` - Unknown or revoked token
    /// * `Expired` - Token lifetime has elapsed
    /// * `DatabaseError` - Lookup failed
    pub async fn resolve(&self, token: &str) -> Result<UserId, TokenError> {
        let digest = self.generator.digest(token);

        let stored = self
            .repository
            .find_by_digest(&digest)
            .await?
            .ok_or(TokenError::NotFound)?;

        if stored.is_expired(Utc::now()) {
            if let Err(e) = self.repository.delete_by_digest(&digest).await {
                tracing::debug!(error = %e, "Failed to prune expired token");
            }
            return Err(TokenError::Expired);
        }

        Ok(stored.user_id)
    }

    /// Revoke a presented token so it no longer resolves.
    ///
    /// # Errors
    /// * `NotFound` - Unknown or already revoked token
    /// * `DatabaseError` - Deletion failed
    pub async fn revoke(&self, token: &str) -> Result<(), TokenError> {
        let digest = self.generator.digest(token);
        self.repository.delete_by_digest(&digest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryTokenRepository;

    fn issuer(lifetime: Option<Duration>) -> (TokenIssuer<InMemoryTokenRepository>, Arc<InMemoryTokenRepository>) {
        let repository = Arc::new(InMemoryTokenRepository::default());
        (TokenIssuer::new(Arc::clone(&repository), lifetime), repository)
    }

    #[tokio::test]
    async fn test_resolve_issued_token() {
        let (issuer, _) = issuer(None);
        let user_id = UserId::new();

        let token = issuer.issue(&user_id).await.unwrap();

        assert_eq!(issuer.resolve(&token).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_issue_twice_gives_distinct_resolvable_tokens() {
        let (issuer, _) = issuer(None);
        let user_id = UserId::new();

        let first = issuer.issue(&user_id).await.unwrap();
        let second = issuer.issue(&user_id).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(issuer.resolve(&first).await.unwrap(), user_id);
        assert_eq!(issuer.resolve(&second).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_concurrent_issues_are_independent() {
        let (issuer, _) = issuer(None);
        let issuer = Arc::new(issuer);
        let user_id = UserId::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let issuer = Arc::clone(&issuer);
                tokio::spawn(async move { issuer.issue(&user_id).await })
            })
            .collect();

        let mut tokens = Vec::new();
        for handle in handles {
            tokens.push(handle.await.unwrap().unwrap());
        }

        for token in &tokens {
            assert_eq!(issuer.resolve(token).await.unwrap(), user_id);
        }
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 8);
    }

    #[tokio::test]
    async fn test_only_digest_is_stored() {
        let (issuer, repository) = issuer(None);

        let token = issuer.issue(&UserId::new()).await.unwrap();

        let stored = repository.all();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].digest, token);
        assert_eq!(stored[0].digest, TokenGenerator::new().digest(&token));
        assert_eq!(stored[0].name, TOKEN_NAME);
        assert!(stored[0].expires_at.is_none());
    }

    #[tokio::test]
    async fn test_resolve_unknown_token() {
        let (issuer, _) = issuer(None);
        assert_eq!(
            issuer.resolve("not-a-real-token").await,
            Err(TokenError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_and_pruned() {
        let (issuer, repository) = issuer(Some(Duration::seconds(-1)));

        let token = issuer.issue(&UserId::new()).await.unwrap();

        assert_eq!(issuer.resolve(&token).await, Err(TokenError::Expired));
        assert!(repository.all().is_empty());
    }

    #[tokio::test]
    async fn test_lifetime_sets_expiry() {
        let (issuer, repository) = issuer(Some(Duration::hours(2)));

        let token = issuer.issue(&UserId::new()).await.unwrap();

        let stored = repository.all();
        let expires_at = stored[0].expires_at.unwrap();
        assert_eq!(expires_at - stored[0].created_at, Duration::hours(2));
        assert!(issuer.resolve(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_revoke() {
        let (issuer, _) = issuer(None);
        let token = issuer.issue(&UserId::new()).await.unwrap();

        issuer.revoke(&token).await.unwrap();

        assert_eq!(issuer.resolve(&token).await, Err(TokenError::NotFound));
        assert_eq!(issuer.revoke(&token).await, Err(TokenError::NotFound));
    }
}
