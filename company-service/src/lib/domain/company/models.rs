use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::company::errors::CompanyIdError;
use crate::domain::email::EmailAddress;
use crate::domain::validation::max_chars;
use crate::domain::validation::required;
use crate::domain::validation::FieldError;
use crate::domain::validation::ValidationErrors;

/// Company directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub email: EmailAddress,
    pub address: CompanyAddress,
    pub phone_no: PhoneNumber,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Overwrite the supplied fields and refresh `updated_at`.
    pub fn apply(&mut self, changes: CompanyFields, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(phone_no) = changes.phone_no {
            self.phone_no = phone_no;
        }
        self.updated_at = now;
    }
}

/// Company unique identifier, time-ordered so newer records sort later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CompanyIdError> {
        Uuid::parse_str(s)
            .map(CompanyId)
            .map_err(|e| CompanyIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_TEXT_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(name: String) -> Result<Self, FieldError> {
        Self::parse(Some(name))
    }

    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        max_chars(required(raw)?, MAX_TEXT_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAddress(String);

impl CompanyAddress {
    pub fn new(address: String) -> Result<Self, FieldError> {
        Self::parse(Some(address))
    }

    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        max_chars(required(raw)?, MAX_TEXT_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number of exactly 11 ASCII digits, stored as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const DIGITS: usize = 11;

    fn digits_error() -> FieldError {
        FieldError::Digits {
            digits: Self::DIGITS,
        }
    }

    pub fn new(phone_no: String) -> Result<Self, FieldError> {
        Self::parse(Some(phone_no))
    }

    pub fn parse(raw: Option<String>) -> Result<Self, FieldError> {
        let phone_no = required(raw)?;

        if phone_no.len() != Self::DIGITS || !phone_no.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::digits_error());
        }

        Ok(Self(phone_no))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A supplied field value before any constraint is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Explicit `null`.
    Null,
    /// Supplied, but not something the field can hold as text.
    Mistyped,
}

impl FieldValue {
    /// Text content; `null` counts as missing, a wrong type fails with `mistyped`.
    fn into_text(self, mistyped: FieldError) -> Result<String, FieldError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Null => Err(FieldError::Required),
            FieldValue::Mistyped => Err(mistyped),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

/// Raw company fields as received from the client.
///
/// `None` means the field was not supplied.
#[derive(Debug, Clone, Default)]
pub struct CompanyInput {
    pub name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub phone_no: Option<FieldValue>,
}

fn supplied_text(
    value: Option<FieldValue>,
    mistyped: FieldError,
) -> Result<Option<String>, FieldError> {
    value.map(|value| value.into_text(mistyped)).transpose()
}

/// Company fields that passed their individual checks.
#[derive(Debug, Clone, Default)]
pub struct CompanyFields {
    pub name: Option<CompanyName>,
    pub email: Option<EmailAddress>,
    pub address: Option<CompanyAddress>,
    pub phone_no: Option<PhoneNumber>,
}

/// Validated data for a new company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: CompanyName,
    pub email: EmailAddress,
    pub address: CompanyAddress,
    pub phone_no: PhoneNumber,
}

impl CompanyFields {
    /// Complete record data, if every field passed.
    pub fn into_new_company(self) -> Option<NewCompany> {
        match (self.name, self.email, self.address, self.phone_no) {
            (Some(name), Some(email), Some(address), Some(phone_no)) => Some(NewCompany {
                name,
                email,
                address,
                phone_no,
            }),
            _ => None,
        }
    }
}

impl CompanyInput {
    /// Check every field for creation; absent fields fail `required`.
    pub fn validate_all(self) -> (CompanyFields, ValidationErrors) {
        let mut errors = ValidationErrors::new();

        let fields = CompanyFields {
            name: errors.check(
                "name",
                supplied_text(self.name, FieldError::NotString).and_then(CompanyName::parse),
            ),
            email: errors.check(
                "email",
                supplied_text(self.email, FieldError::InvalidEmail).and_then(EmailAddress::parse),
            ),
            address: errors.check(
                "address",
                supplied_text(self.address, FieldError::NotString)
                    .and_then(CompanyAddress::parse),
            ),
            phone_no: errors.check(
                "phoneNo",
                supplied_text(self.phone_no, PhoneNumber::digits_error())
                    .and_then(PhoneNumber::parse),
            ),
        };

        (fields, errors)
    }

    /// Check only the supplied fields for a partial update.
    ///
    /// A supplied blank value still fails `required`.
    pub fn validate_supplied(self) -> (CompanyFields, ValidationErrors) {
        let mut errors = ValidationErrors::new();
        let mut fields = CompanyFields::default();

        if let Some(name) = self.name {
            fields.name = errors.check(
                "name",
                name.into_text(FieldError::NotString)
                    .and_then(CompanyName::new),
            );
        }
        if let Some(email) = self.email {
            fields.email = errors.check(
                "email",
                email
                    .into_text(FieldError::InvalidEmail)
                    .and_then(|email| EmailAddress::parse(Some(email))),
            );
        }
        if let Some(address) = self.address {
            fields.address = errors.check(
                "address",
                address
                    .into_text(FieldError::NotString)
                    .and_then(CompanyAddress::new),
            );
        }
        if let Some(phone_no) = self.phone_no {
            fields.phone_no = errors.check(
                "phoneNo",
                phone_no
                    .into_text(PhoneNumber::digits_error())
                    .and_then(PhoneNumber::new),
            );
        }

        (fields, errors)
    }
}
