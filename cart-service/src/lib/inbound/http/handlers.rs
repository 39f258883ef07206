pub mod add_to_cart;
pub mod delete_cart_item;
pub mod get_cart;
pub mod update_cart_item;

use std::collections::BTreeMap;

pub use add_to_cart::add_to_cart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
pub use delete_cart_item::delete_cart_item;
pub use get_cart::get_cart;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
pub use update_cart_item::update_cart_item;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartSummary;

/// Standardized API success response
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Cart request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorData { detail: message })).into_response()
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ProductNotFound(_) => ApiError::NotFound("Product not found".to_string()),
            CartError::CartEntryNotFound(_) => {
                ApiError::NotFound("Product not found in cart".to_string())
            }
            CartError::Catalog(_) | CartError::Storage(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub detail: String,
}

/// Query string of the mutating cart endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityQuery {
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartResponseData {
    pub total_price: f64,
    pub total_quantity: u64,
    pub cart_items: BTreeMap<u32, CartItemData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemData {
    pub name: String,
    pub quantity: u32,
}

impl From<&CartSummary> for CartResponseData {
    fn from(summary: &CartSummary) -> Self {
        Self {
            total_price: summary.total_price,
            total_quantity: summary.total_quantity,
            cart_items: summary
                .items
                .iter()
                .map(|(id, item)| {
                    (
                        id.0,
                        CartItemData {
                            name: item.name.clone(),
                            quantity: item.quantity,
                        },
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::errors::CatalogError;
    use crate::CartEntry;
    use crate::ProductId;

    #[test]
    fn test_not_found_messages_are_fixed() {
        assert_eq!(
            ApiError::from(CartError::ProductNotFound(ProductId(9))),
            ApiError::NotFound("Product not found".to_string())
        );
        assert_eq!(
            ApiError::from(CartError::CartEntryNotFound(ProductId(9))),
            ApiError::NotFound("Product not found in cart".to_string())
        );
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        let err = ApiError::from(CartError::Catalog(CatalogError::Unavailable(
            "down".to_string(),
        )));

        assert!(matches!(err, ApiError::InternalServerError(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_cart_response_shape() {
        let summary = CartSummary::from_entries(&Vec::<CartEntry>::new());
        let body = serde_json::to_value(CartResponseData::from(&summary)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "total_price": 0.0,
                "total_quantity": 0,
                "cart_items": {}
            })
        );
    }
}
