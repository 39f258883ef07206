use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_to_cart;
use super::handlers::delete_cart_item;
use super::handlers::get_cart;
use super::handlers::update_cart_item;
use super::middleware::authenticate;
use crate::domain::cart::models::CartScope;
use crate::domain::cart::service::CartService;
use crate::outbound::repositories::InMemoryCartRepository;
use crate::outbound::repositories::InMemoryProductCatalog;

pub type AppCartService = CartService<InMemoryCartRepository, InMemoryProductCatalog>;

#[derive(Clone)]
pub struct AppState {
    pub cart_service: Arc<AppCartService>,
    pub authenticator: Arc<Authenticator>,
    pub cart_scope: CartScope,
}

/// Every cart route sits behind bearer token authentication.
pub fn create_router(
    cart_service: Arc<AppCartService>,
    authenticator: Arc<Authenticator>,
    cart_scope: CartScope,
) -> Router {
    let state = AppState {
        cart_service,
        authenticator,
        cart_scope,
    };

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
        .route("/cart", get(get_cart))
        .route("/cart/add/:product_id", post(add_to_cart))
        .route("/cart/update/:product_id", put(update_cart_item))
        .route("/cart/delete/:product_id", delete(delete_cart_item))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
