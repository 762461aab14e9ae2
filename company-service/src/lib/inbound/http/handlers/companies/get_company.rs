use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_company_id;
use super::CompanyResponseData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_company<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    Path(company_id): Path<String>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    let company_id = parse_company_id(&company_id)?;

    state
        .company_service
        .get_company(&company_id)
        .await
        .map_err(ApiError::from)
        .map(|ref company| {
            ApiSuccess::new(
                StatusCode::OK,
                CompanyResponseData::new("Company retrieved successfully", company),
            )
        })
}
