use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::parse_company_id;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_company<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    Path(company_id): Path<String>,
) -> Result<ApiSuccess<DeleteCompanyResponseData>, ApiError> {
    let company_id = parse_company_id(&company_id)?;

    state
        .company_service
        .delete_company(&company_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteCompanyResponseData {
                    message: "Company deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCompanyResponseData {
    pub message: String,
}
