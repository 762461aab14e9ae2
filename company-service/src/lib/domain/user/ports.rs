use async_trait::async_trait;

use crate::domain::email::EmailAddress;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::CredentialsInput;
use crate::domain::user::models::RegistrationInput;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for registration, login and bearer token checks.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `input` - Raw name, email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Validation` - One or more fields are missing or malformed, or the email is taken
    /// * `EmailAlreadyExists` - The store rejected the email as a duplicate
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, input: RegistrationInput) -> Result<User, UserError>;

    /// Verify credentials and issue a new bearer token.
    ///
    /// # Errors
    /// * `Validation` - Email or password missing, or email malformed
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, input: CredentialsInput) -> Result<AuthenticatedSession, UserError>;

    /// Resolve a presented bearer token to its user.
    ///
    /// # Errors
    /// * `Unauthenticated` - Unknown, revoked or expired token
    /// * `DatabaseError` - Database operation failed
    async fn resolve_token(&self, token: &str) -> Result<User, UserError>;

    /// Revoke a presented bearer token.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is unknown or already revoked
    /// * `DatabaseError` - Database operation failed
    async fn logout(&self, token: &str) -> Result<(), UserError>;
}

/// Persistence operations for user credentials.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
