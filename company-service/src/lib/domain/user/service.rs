use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::ports::TokenRepository;
use crate::domain::token::TokenIssuer;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::CredentialsInput;
use crate::domain::user::models::RegistrationInput;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::validation::FieldError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and bearer authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    repository: Arc<UR>,
    token_issuer: TokenIssuer<TR>,
    password_hasher: auth::PasswordHasher,
    /// Verified against when the email is unknown so both login failures cost one Argon2 run.
    dummy_hash: Option<String>,
}

const DUMMY_PASSWORD: &str = "unknown-account-placeholder1";

impl<UR, TR> AuthService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `tokens` - Bearer token persistence implementation
    /// * `token_lifetime` - Validity period of issued tokens; `None` for no expiry
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(repository: Arc<UR>, tokens: Arc<TR>, token_lifetime: Option<Duration>) -> Self {
        let password_hasher = auth::PasswordHasher::new();
        let dummy_hash = password_hasher
            .hash(DUMMY_PASSWORD)
            .map_err(|e| tracing::error!(error = %e, "Failed to prepare placeholder hash"))
            .ok();

        Self {
            repository,
            token_issuer: TokenIssuer::new(tokens, token_lifetime),
            password_hasher,
            dummy_hash,
        }
    }
}

#[async_trait]
impl<UR, TR> AuthServicePort for AuthService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    async fn register(&self, input: RegistrationInput) -> Result<User, UserError> {
        let (fields, mut errors) = input.validate();

        if let Some(email) = &fields.email {
            if self.repository.find_by_email(email).await?.is_some() {
                errors.add("email", FieldError::Taken);
            }
        }

        let command = match fields.into_command() {
            Some(command) if errors.is_empty() => command,
            _ => return Err(UserError::Validation(errors)),
        };

        let password_hash = self.password_hasher.hash(command.password.as_str())?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, input: CredentialsInput) -> Result<AuthenticatedSession, UserError> {
        let command = input.validate().map_err(UserError::Validation)?;

        let user = match self.repository.find_by_email(&command.email).await? {
            Some(user) => user,
            None => {
                if let Some(dummy_hash) = &self.dummy_hash {
                    let _ = self.password_hasher.verify(&command.password, dummy_hash);
                }
                tracing::debug!("Login attempt for unknown email");
                return Err(UserError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)?
        {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&user.id).await?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession { user, token })
    }

    async fn resolve_token(&self, token: &str) -> Result<User, UserError> {
        let user_id = self.token_issuer.resolve(token).await?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::Unauthenticated(TokenError::NotFound))
    }

    async fn logout(&self, token: &str) -> Result<(), UserError> {
        self.token_issuer.revoke(token).await?;
        tracing::info!("Bearer token revoked");
        Ok(())
    }
}
