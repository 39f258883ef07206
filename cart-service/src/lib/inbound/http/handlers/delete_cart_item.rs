use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::cart::ports::CartServicePort;
use crate::domain::catalog::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_cart_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(product_id): Path<u32>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let owner = state.cart_scope.owner_for(&auth_user.subject);

    state
        .cart_service
        .remove_item(&owner, ProductId(product_id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("Product deleted from cart successfully"),
            )
        })
}
