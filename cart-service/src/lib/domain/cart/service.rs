use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::errors::CartError;
use super::models::CartEntry;
use super::models::CartOwner;
use super::models::CartSummary;
use super::ports::CartRepository;
use super::ports::CartServicePort;
use crate::domain::catalog::models::Product;
use crate::domain::catalog::models::ProductId;
use crate::domain::catalog::ports::ProductCatalog;

/// Concrete implementation of CartServicePort.
///
/// Every read-modify-write on the cart store runs under `write_lock`, so two
/// concurrent adds for the same product both land. Generic over repository
/// and catalog for testability.
pub struct CartService<CR, PC>
where
    CR: CartRepository,
    PC: ProductCatalog,
{
    cart_repository: Arc<CR>,
    catalog: Arc<PC>,
    write_lock: Mutex<()>,
}

impl<CR, PC> CartService<CR, PC>
where
    CR: CartRepository,
    PC: ProductCatalog,
{
    pub fn new(cart_repository: Arc<CR>, catalog: Arc<PC>) -> Self {
        Self {
            cart_repository,
            catalog,
            write_lock: Mutex::new(()),
        }
    }

    async fn catalog_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        self.catalog
            .find(product_id)
            .await?
            .ok_or(CartError::ProductNotFound(product_id))
    }
}

#[async_trait]
impl<CR, PC> CartServicePort for CartService<CR, PC>
where
    CR: CartRepository,
    PC: ProductCatalog,
{
    async fn add_item(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartEntry, CartError> {
        let product = self.catalog_product(product_id).await?;

        let _guard = self.write_lock.lock().await;

        // No ceiling against catalog stock.
        let entry = match self.cart_repository.get(owner, product_id).await? {
            Some(mut entry) => {
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry
            }
            None => CartEntry::new(product, quantity),
        };

        self.cart_repository.put(owner, entry.clone()).await?;

        tracing::debug!(
            owner = %owner,
            product_id = %product_id,
            added = quantity,
            quantity = entry.quantity,
            "Product added to cart"
        );

        Ok(entry)
    }

    async fn update_item(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartEntry, CartError> {
        self.catalog_product(product_id).await?;

        let _guard = self.write_lock.lock().await;

        let mut entry = self
            .cart_repository
            .get(owner, product_id)
            .await?
            .ok_or(CartError::CartEntryNotFound(product_id))?;

        entry.quantity = quantity;
        self.cart_repository.put(owner, entry.clone()).await?;

        tracing::debug!(
            owner = %owner,
            product_id = %product_id,
            quantity,
            "Cart quantity updated"
        );

        Ok(entry)
    }

    async fn remove_item(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let _guard = self.write_lock.lock().await;

        if !self.cart_repository.delete(owner, product_id).await? {
            return Err(CartError::CartEntryNotFound(product_id));
        }

        tracing::debug!(owner = %owner, product_id = %product_id, "Product removed from cart");

        Ok(())
    }

    async fn view_cart(&self, owner: &CartOwner) -> Result<CartSummary, CartError> {
        let entries = self.cart_repository.list(owner).await?;

        Ok(CartSummary::from_entries(&entries))
    }
}
