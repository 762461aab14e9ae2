use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::CompanyRecordData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_companies<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
) -> Result<ApiSuccess<ListCompaniesResponseData>, ApiError> {
    let companies = state.company_service.list_companies().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListCompaniesResponseData {
            result: companies.iter().map(CompanyRecordData::from).collect(),
            message: "Records retrieved successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCompaniesResponseData {
    pub result: Vec<CompanyRecordData>,
    pub message: String,
}
