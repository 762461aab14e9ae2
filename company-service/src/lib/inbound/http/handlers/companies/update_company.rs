use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::parse_company_id;
use super::CompanyRequestBody;
use super::CompanyResponseData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Serves both PUT and PATCH; only the supplied fields change.
pub async fn update_company<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    Path(company_id): Path<String>,
    payload: Result<Json<CompanyRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    let company_id = parse_company_id(&company_id)?;
    let Json(body) = payload?;

    state
        .company_service
        .update_company(&company_id, body.into())
        .await
        .map_err(|e| ApiError::from(e).with_validation_message("Unable to update Company"))
        .map(|ref company| {
            ApiSuccess::new(
                StatusCode::OK,
                CompanyResponseData::new("Company updated successfully", company),
            )
        })
}
