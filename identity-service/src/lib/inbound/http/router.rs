use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login;
use crate::domain::credential::service::CredentialService;
use crate::outbound::repositories::InMemoryCredentialRepository;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<CredentialService<InMemoryCredentialRepository>>,
}

pub fn create_router(
    credential_service: Arc<CredentialService<InMemoryCredentialRepository>>,
) -> Router {
    let state = AppState { credential_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: the login body and any bearer token are secrets.
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
        .route("/login", post(login))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
