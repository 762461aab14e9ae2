use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::StatusMessageData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::models::RegistrationInput;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    payload: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<StatusMessageData>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .register(body.into())
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                StatusMessageData::new(StatusCode::CREATED, "User created successfully"),
            )
        })
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, Default, Deserialize)]
pub struct RegisterRequestBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl From<RegisterRequestBody> for RegistrationInput {
    fn from(body: RegisterRequestBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            password: body.password,
        }
    }
}
