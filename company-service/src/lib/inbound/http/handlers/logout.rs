use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::StatusMessageData;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Revoke the bearer token used for this request.
pub async fn logout<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<StatusMessageData>, ApiError> {
    state.auth_service.logout(&current.token).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        StatusMessageData::new(StatusCode::OK, "Logged out successfully"),
    ))
}
