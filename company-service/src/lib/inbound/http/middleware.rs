use std::fmt;

use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UNAUTHENTICATED_MESSAGE;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Extension type to store the authenticated user in request extensions
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Presented bearer token, kept so the request can revoke it.
    pub token: String,
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user", &self.user.id)
            .finish_non_exhaustive()
    }
}

/// Middleware that resolves the bearer token and adds the user to request extensions
pub async fn authenticate<AS: AuthServicePort, CS: CompanyServicePort>(
    State(state): State<AppState<AS, CS>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let user = state
        .auth_service
        .resolve_token(&token)
        .await
        .map_err(|e| match e {
            UserError::Unauthenticated(reason) => {
                tracing::warn!(reason = %reason, "Bearer token rejected");
                unauthenticated()
            }
            other => ApiError::from(other),
        })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user, token });

    Ok(next.run(req).await)
}

fn unauthenticated() -> ApiError {
    ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthenticated()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Invalid Authorization header");
        unauthenticated()
    })?;

    // The scheme name is case-insensitive.
    let token = auth_str
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim());

    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            tracing::warn!("Authorization header is not a bearer token");
            Err(unauthenticated())
        }
    }
}
