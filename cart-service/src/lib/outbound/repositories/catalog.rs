use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::config::ProductConfig;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Product;
use crate::domain::catalog::models::ProductId;
use crate::domain::catalog::ports::ProductCatalog;

/// Fixed product catalog built at startup.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: BTreeMap<ProductId, Product>,
}

impl InMemoryProductCatalog {
    /// # Errors
    /// * `DuplicateProduct` - Two products share an id
    /// * `InvalidPrice` - Price is negative or not finite
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();

        for product in products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }

            let id = product.id;
            if by_id.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateProduct(id));
            }
        }

        Ok(Self { products: by_id })
    }

    pub fn from_config(products: &[ProductConfig]) -> Result<Self, CatalogError> {
        Self::new(products.iter().map(Product::from).collect())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<&ProductConfig> for Product {
    fn from(config: &ProductConfig) -> Self {
        Self {
            id: ProductId(config.id),
            name: config.name.clone(),
            image: config.image.clone(),
            price: config.price,
            quantity: config.quantity,
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.values().cloned().collect())
    }
}
