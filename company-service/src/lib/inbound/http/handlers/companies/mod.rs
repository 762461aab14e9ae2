use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyInput;
use crate::domain::company::models::FieldValue;

pub mod create_company;
pub mod delete_company;
pub mod get_company;
pub mod list_companies;
pub mod update_company;

pub use create_company::create_company;
pub use delete_company::delete_company;
pub use get_company::get_company;
pub use list_companies::list_companies;
pub use update_company::update_company;

/// An unparseable id can never match a record.
fn parse_company_id(raw: &str) -> Result<CompanyId, ApiError> {
    CompanyId::from_string(raw).map_err(|e| {
        tracing::debug!(company_id = raw, error = %e, "Rejected company id");
        ApiError::NotFound("Company not found".to_string())
    })
}

/// HTTP request body for creating or updating a company (raw JSON)
///
/// Fields are kept as raw JSON so that `null` and wrongly typed values reach
/// validation as field errors instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyRequestBody {
    #[serde(default, deserialize_with = "supplied")]
    name: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    email: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    address: Option<Value>,
    #[serde(default, deserialize_with = "supplied", rename = "phoneNo")]
    phone_no: Option<Value>,
}

/// Present keys always deserialize to `Some`, including an explicit `null`.
fn supplied<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn text_value(value: Value) -> FieldValue {
    match value {
        Value::String(text) => FieldValue::Text(text),
        Value::Null => FieldValue::Null,
        _ => FieldValue::Mistyped,
    }
}

/// Phone numbers may arrive as JSON numbers; their digits are checked like text.
fn phone_value(value: Value) -> FieldValue {
    match value {
        Value::Number(number) => FieldValue::Text(number.to_string()),
        other => text_value(other),
    }
}

impl From<CompanyRequestBody> for CompanyInput {
    fn from(body: CompanyRequestBody) -> Self {
        Self {
            name: body.name.map(text_value),
            email: body.email.map(text_value),
            address: body.address.map(text_value),
            phone_no: body.phone_no.map(phone_value),
        }
    }
}

/// Client view of a single company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyData {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "phoneNo")]
    pub phone_no: String,
}

impl From<&Company> for CompanyData {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.as_str().to_string(),
            email: company.email.as_str().to_string(),
            address: company.address.as_str().to_string(),
            phone_no: company.phone_no.as_str().to_string(),
        }
    }
}

/// Full stored record, as returned by the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRecordData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "phoneNo")]
    pub phone_no: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Company> for CompanyRecordData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            name: company.name.as_str().to_string(),
            email: company.email.as_str().to_string(),
            address: company.address.as_str().to_string(),
            phone_no: company.phone_no.as_str().to_string(),
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResponseData {
    pub message: String,
    pub result: CompanyData,
}

impl CompanyResponseData {
    fn new(message: &str, company: &Company) -> Self {
        Self {
            message: message.to_string(),
            result: company.into(),
        }
    }
}
