use std::fmt;
use std::str::FromStr;

use crate::domain::validation::max_chars;
use crate::domain::validation::required;
use crate::domain::validation::FieldError;

/// Email address value type, validated with an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `TooLong` - More than 255 characters
    /// * `InvalidEmail` - Not a syntactically valid address
    pub fn new(email: String) -> Result<Self, FieldError> {
        let email = max_chars(email, Self::MAX_LENGTH)?;
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|_| FieldError::InvalidEmail)
    }

    /// Parse raw request input: required, trimmed, then format-checked.
    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        Self::new(required(raw)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = EmailAddress::parse(Some(" a@acme.com ".to_string())).unwrap();
        assert_eq!(email.as_str(), "a@acme.com");
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(
            EmailAddress::parse(Some("not-an-email".to_string())),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_length_limit() {
        let too_long = format!("{}@acme.com", "a".repeat(247));
        assert_eq!(too_long.chars().count(), 256);

        assert_eq!(
            EmailAddress::parse(Some(too_long)),
            Err(FieldError::TooLong { max: 255 })
        );
    }

    #[test]
    fn test_missing_email() {
        assert_eq!(EmailAddress::parse(None), Err(FieldError::Required));
    }
}
