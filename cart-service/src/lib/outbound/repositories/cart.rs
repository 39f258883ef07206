use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartEntry;
use crate::domain::cart::models::CartOwner;
use crate::domain::cart::ports::CartRepository;
use crate::domain::catalog::models::ProductId;

/// Cart store held in process memory.
///
/// Carts are lost on restart. Entries are kept ordered by product id so
/// listings are stable.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<CartOwner, BTreeMap<ProductId, CartEntry>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get(
        &self,
        owner: &CartOwner,
        product_id: ProductId,
    ) -> Result<Option<CartEntry>, CartError> {
        Ok(self
            .carts
            .read()
            .await
            .get(owner)
            .and_then(|cart| cart.get(&product_id))
            .cloned())
    }

    async fn put(&self, owner: &CartOwner, entry: CartEntry) -> Result<(), CartError> {
        self.carts
            .write()
            .await
            .entry(owner.clone())
            .or_default()
            .insert(entry.product_id(), entry);

        Ok(())
    }

    async fn delete(&self, owner: &CartOwner, product_id: ProductId) -> Result<bool, CartError> {
        let mut carts = self.carts.write().await;

        let Some(cart) = carts.get_mut(owner) else {
            return Ok(false);
        };
        let removed = cart.remove(&product_id).is_some();

        // Drop emptied carts so per-user maps do not grow without bound.
        if cart.is_empty() {
            carts.remove(owner);
        }

        Ok(removed)
    }

    async fn list(&self, owner: &CartOwner) -> Result<Vec<CartEntry>, CartError> {
        Ok(self
            .carts
            .read()
            .await
            .get(owner)
            .map(|cart| cart.values().cloned().collect())
            .unwrap_or_default())
    }
}
