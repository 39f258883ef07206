use thiserror::Error;

use crate::ProductId;

/// Error type for catalog operations and catalog seeding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(ProductId),

    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: f64 },

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
