use async_trait::async_trait;

use super::errors::CatalogError;
use super::models::Product;
use super::models::ProductId;

/// Read access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync + 'static {
    /// Retrieve a product by identifier.
    ///
    /// # Returns
    /// Product if it exists, None otherwise
    ///
    /// # Errors
    /// * `Unavailable` - Backing store could not be read
    async fn find(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// List every product, ordered by identifier.
    ///
    /// # Errors
    /// * `Unavailable` - Backing store could not be read
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;
}
