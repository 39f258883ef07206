use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CartResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<CartResponseData>, ApiError> {
    let owner = state.cart_scope.owner_for(&auth_user.subject);

    state
        .cart_service
        .view_cart(&owner)
        .await
        .map_err(ApiError::from)
        .map(|summary| ApiSuccess::new(StatusCode::OK, CartResponseData::from(&summary)))
}
