use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::companies::create_company;
use super::handlers::companies::delete_company;
use super::handlers::companies::get_company;
use super::handlers::companies::list_companies;
use super::handlers::companies::update_company;
use super::handlers::current_user::current_user;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::AuthServicePort;

/// Shared handler state: the two domain services behind their ports.
pub struct AppState<AS, CS>
where
    AS: AuthServicePort,
    CS: CompanyServicePort,
{
    pub auth_service: Arc<AS>,
    pub company_service: Arc<CS>,
}

impl<AS, CS> Clone for AppState<AS, CS>
where
    AS: AuthServicePort,
    CS: CompanyServicePort,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            company_service: Arc::clone(&self.company_service),
        }
    }
}

pub fn create_router<AS, CS>(auth_service: Arc<AS>, company_service: Arc<CS>) -> Router
where
    AS: AuthServicePort,
    CS: CompanyServicePort,
{
    let state = AppState {
        auth_service,
        company_service,
    };

    let public_routes = Router::new()
        .route("/api/login", post(login::<AS, CS>))
        .route("/api/register", post(register::<AS, CS>));

    let protected_routes = Router::new()
        .route("/api/user", get(current_user))
        .route("/api/logout", post(logout::<AS, CS>))
        .route(
            "/api/companies",
            get(list_companies::<AS, CS>).post(create_company::<AS, CS>),
        )
        .route(
            "/api/companies/:company_id",
            get(get_company::<AS, CS>)
                .put(update_company::<AS, CS>)
                .patch(update_company::<AS, CS>)
                .delete(delete_company::<AS, CS>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<AS, CS>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
