use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::company::errors::CompanyError;
use crate::domain::validation::FieldError;
use crate::domain::validation::ValidationErrors;
use crate::user::errors::UserError;

pub mod companies;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod register;

pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";
const COMPANY_NOT_FOUND_MESSAGE: &str = "Company not found";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity {
        message: String,
        errors: ValidationErrors,
    },
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    /// Replace the top-level message of a validation failure.
    pub fn with_validation_message(self, message: &str) -> Self {
        match self {
            ApiError::UnprocessableEntity { errors, .. } => ApiError::UnprocessableEntity {
                message: message.to_string(),
                errors,
            },
            other => other,
        }
    }

    fn validation(errors: ValidationErrors) -> Self {
        ApiError::UnprocessableEntity {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }

    fn email_taken() -> Self {
        let mut errors = ValidationErrors::new();
        errors.add("email", FieldError::Taken);
        Self::validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::message(INTERNAL_ERROR_MESSAGE.to_string()),
                )
            }
            ApiError::UnprocessableEntity { message, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorData {
                    message,
                    status: None,
                    errors: Some(errors.into_inner()),
                },
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorData::message(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::message(msg)),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ApiErrorData {
                    message: msg,
                    status: Some(StatusCode::UNAUTHORIZED.as_u16()),
                    errors: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(errors) => ApiError::validation(errors),
            UserError::EmailAlreadyExists(_) => ApiError::email_taken(),
            UserError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::Unauthenticated(_) => {
                ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::Validation(errors) => ApiError::validation(errors),
            CompanyError::EmailAlreadyExists(_) => ApiError::email_taken(),
            CompanyError::NotFound(_) => ApiError::NotFound(COMPANY_NOT_FOUND_MESSAGE.to_string()),
            CompanyError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Error response body; `status` and `errors` appear only where the route contract has them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorData {
    fn message(message: String) -> Self {
        Self {
            message,
            status: None,
            errors: None,
        }
    }
}

/// Body of the form `{message, status}` used by the account endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessageData {
    pub message: String,
    pub status: u16,
}

impl StatusMessageData {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            message: message.to_string(),
            status: status.as_u16(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::json;
    use serde_json::Value;

    use super::*;
    use crate::domain::token::errors::TokenError;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unauthorized_body_carries_status() {
        let response = ApiError::from(UserError::Unauthenticated(TokenError::Expired)).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Unauthenticated.", "status": 401})
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            ApiError::from(CompanyError::DatabaseError("connection refused".to_string()))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_is_field_error() {
        let error = ApiError::from(CompanyError::EmailAlreadyExists("a@acme.com".to_string()))
            .with_validation_message("Unable to create Company");
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Unable to create Company",
                "errors": {"email": ["The email has already been taken."]}
            })
        );
    }

    #[test]
    fn test_with_validation_message_leaves_other_errors() {
        let error = ApiError::NotFound("Company not found".to_string());
        assert_eq!(
            error.clone().with_validation_message("Unable to update Company"),
            error
        );
    }
}
