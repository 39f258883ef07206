use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Catalog product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    /// Unit price
    pub price: f64,
    /// Units in stock. Informational only, adding to a cart does not check it.
    pub quantity: u32,
}
