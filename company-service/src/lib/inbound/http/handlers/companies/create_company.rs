use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::CompanyRequestBody;
use super::CompanyResponseData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_company<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    payload: Result<Json<CompanyRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .company_service
        .create_company(body.into())
        .await
        .map_err(|e| ApiError::from(e).with_validation_message("Unable to create Company"))
        .map(|ref company| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CompanyResponseData::new("Company created successfully", company),
            )
        })
}
