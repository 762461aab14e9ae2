use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::validation::max_chars;
use crate::domain::validation::required;
use crate::domain::validation::FieldError;
use crate::domain::validation::ValidationErrors;

/// Registered user holding login credentials.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name of a user, 1-255 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, FieldError> {
        Self::parse(Some(name))
    }

    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        max_chars(required(raw)?, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted for registration.
///
/// At least 8 characters with at least one letter and one digit. Never
/// printed; the service hashes it before anything is persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    const MIN_LENGTH: usize = 8;

    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        // Passwords are taken verbatim; only blank input counts as missing.
        let password = raw
            .filter(|p| !p.trim().is_empty())
            .ok_or(FieldError::Required)?;

        if password.chars().count() < Self::MIN_LENGTH {
            return Err(FieldError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        let has_letter = password.chars().any(char::is_alphabetic);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(has_letter && has_digit) {
            return Err(FieldError::LettersAndNumbers);
        }

        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(<redacted>)")
    }
}

/// Raw registration input as received from the client.
#[derive(Clone, Default)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Validated registration data.
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: NewPassword,
}

/// Registration fields that passed their individual checks.
#[derive(Debug, Default)]
pub struct RegistrationFields {
    pub name: Option<UserName>,
    pub email: Option<EmailAddress>,
    pub password: Option<NewPassword>,
}

impl RegistrationFields {
    /// Complete command, if every field passed.
    pub fn into_command(self) -> Option<RegisterCommand> {
        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) => Some(RegisterCommand {
                name,
                email,
                password,
            }),
            _ => None,
        }
    }
}

impl RegistrationInput {
    /// Check every field, collecting all violations.
    ///
    /// Fields that passed are returned alongside the errors so the caller can
    /// run store-backed checks (email uniqueness) before deciding.
    pub fn validate(self) -> (RegistrationFields, ValidationErrors) {
        let mut errors = ValidationErrors::new();

        let fields = RegistrationFields {
            name: errors.check("name", UserName::parse(self.name)),
            email: errors.check("email", EmailAddress::parse(self.email)),
            password: errors.check("password", NewPassword::parse(self.password)),
        };

        (fields, errors)
    }
}

/// Raw login input as received from the client.
#[derive(Clone, Default)]
pub struct CredentialsInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Validated login credentials.
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl CredentialsInput {
    /// # Errors
    /// Every missing or malformed field, keyed by name.
    pub fn validate(self) -> Result<LoginCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = errors.check("email", EmailAddress::parse(self.email));
        let password = errors.check(
            "password",
            self.password
                .filter(|p| !p.trim().is_empty())
                .ok_or(FieldError::Required),
        );

        match (email, password) {
            (Some(email), Some(password)) => Ok(LoginCommand { email, password }),
            _ => Err(errors),
        }
    }
}

/// Result of a successful login: the user and a freshly issued bearer token.
#[derive(Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for AuthenticatedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedSession")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_limits() {
        assert!(UserName::new("Bob".to_string()).is_ok());
        assert_eq!(UserName::parse(None), Err(FieldError::Required));
        assert_eq!(
            UserName::new("x".repeat(256)),
            Err(FieldError::TooLong { max: 255 })
        );
    }

    #[test]
    fn test_new_password_policy() {
        assert!(NewPassword::parse(Some("abc12345".to_string())).is_ok());
        assert_eq!(
            NewPassword::parse(Some("abc1234".to_string())),
            Err(FieldError::TooShort { min: 8 })
        );
        assert_eq!(
            NewPassword::parse(Some("abcdefgh".to_string())),
            Err(FieldError::LettersAndNumbers)
        );
        assert_eq!(
            NewPassword::parse(Some("12345678".to_string())),
            Err(FieldError::LettersAndNumbers)
        );
        assert_eq!(NewPassword::parse(None), Err(FieldError::Required));
    }

    #[test]
    fn test_new_password_is_redacted_in_debug() {
        let password = NewPassword::parse(Some("secret123".to_string())).unwrap();
        assert!(!format!("{:?}", password).contains("secret123"));

        let input = RegistrationInput {
            password: Some("secret123".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", input).contains("secret123"));
    }

    #[test]
    fn test_registration_collects_all_errors() {
        let input = RegistrationInput {
            name: None,
            email: Some("nope".to_string()),
            password: Some("short".to_string()),
        };

        let (fields, errors) = input.validate();

        assert!(fields.into_command().is_none());
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_registration_valid() {
        let input = RegistrationInput {
            name: Some("Bob".to_string()),
            email: Some("bob@x.com".to_string()),
            password: Some("abc12345".to_string()),
        };

        let (fields, errors) = input.validate();

        assert!(errors.is_empty());
        let command = fields.into_command().unwrap();
        assert_eq!(command.name.as_str(), "Bob");
        assert_eq!(command.email.as_str(), "bob@x.com");
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let errors = CredentialsInput::default().validate().err().unwrap();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_credentials_do_not_apply_password_policy() {
        let command = CredentialsInput {
            email: Some("bob@x.com".to_string()),
            password: Some("wrong".to_string()),
        }
        .validate()
        .ok()
        .unwrap();

        assert_eq!(command.password, "wrong");
    }
}
