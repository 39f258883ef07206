use async_trait::async_trait;

use super::errors::CartError;
use super::models::CartEntry;
use super::models::CartOwner;
use super::models::CartSummary;
use crate::domain::catalog::models::ProductId;

/// Port for cart domain service operations.
///
/// Callers authenticate before reaching the service; the owner is already
/// resolved from the token subject.
#[async_trait]
pub trait CartServicePort: Send + Sync + 'static {
    /// Add `quantity` units of a product, creating the entry if absent.
    ///
    /// # Errors
    /// * `ProductNotFound` - Product is not in the catalog
    /// * `Storage` - Cart store operation failed
    async fn add_item(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartEntry, CartError>;

    /// Overwrite the quantity of an existing entry.
    ///
    /// # Errors
    /// * `ProductNotFound` - Product is not in the catalog
    /// * `CartEntryNotFound` - Product is not in the cart
    /// * `Storage` - Cart store operation failed
    async fn update_item(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartEntry, CartError>;

    /// Remove an entry.
    ///
    /// # Errors
    /// * `CartEntryNotFound` - Product is not in the cart
    /// * `Storage` - Cart store operation failed
    async fn remove_item(&self, owner: &CartOwner, product_id: ProductId)
        -> Result<(), CartError>;

    /// Summarize the cart with totals.
    ///
    /// # Errors
    /// * `Storage` - Cart store operation failed
    async fn view_cart(&self, owner: &CartOwner) -> Result<CartSummary, CartError>;
}

/// Storage capability behind the cart: get, put, delete and iterate.
///
/// Swapping the implementation changes where carts live without touching
/// the service or the handlers.
#[async_trait]
pub trait CartRepository: Send + Sync + 'static {
    /// Retrieve one entry of a cart.
    async fn get(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
    ) -> Result<Option<CartEntry>, CartError>;

    /// Insert or replace an entry.
    async fn put(&self, owner: &CartOwner, entry: CartEntry) -> Result<(), CartError>;

    /// Remove an entry.
    ///
    /// # Returns
    /// Whether an entry was present
    async fn delete(&self, owner: &CartOwner, product_id: ProductId) -> Result<bool, CartError>;

    /// List every entry of a cart, ordered by product id.
    async fn list(&self, owner: &CartOwner) -> Result<Vec<CartEntry>, CartError>;
}
