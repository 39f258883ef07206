use thiserror::Error;

use crate::domain::catalog::errors::CatalogError;
use crate::ProductId;

/// Top-level error type for all cart-related operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but is not in the cart.
    #[error("Product not found in cart: {0}")]
    CartEntryNotFound(ProductId),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for CartError {
    fn from(err: anyhow::Error) -> Self {
        CartError::Storage(err.to_string())
    }
}
