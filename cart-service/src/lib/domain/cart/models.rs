use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::domain::catalog::models::Product;
use crate::domain::catalog::models::ProductId;

/// Which cart a request operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartOwner {
    /// The single cart every caller sees under `CartScope::Shared`.
    Shared,
    /// A cart private to one token subject.
    User(String),
}

impl fmt::Display for CartOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOwner::Shared => f.write_str("shared"),
            CartOwner::User(subject) => write!(f, "user:{}", subject),
        }
    }
}

/// How carts are partitioned between authenticated callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartScope {
    /// One cart for everyone.
    #[default]
    Shared,
    /// One cart per token subject.
    PerUser,
}

impl CartScope {
    /// Resolve the cart owner for an authenticated subject.
    pub fn owner_for(&self, subject: &str) -> CartOwner {
        match self {
            CartScope::Shared => CartOwner::Shared,
            CartScope::PerUser => CartOwner::User(subject.to_string()),
        }
    }
}

/// A product held in a cart with its quantity.
///
/// Only ever created for a product that exists in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Per-item line of a cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemSummary {
    pub name: String,
    pub quantity: u32,
}

/// Read model of a cart with its aggregate totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub total_price: f64,
    pub total_quantity: u64,
    pub items: BTreeMap<ProductId, CartItemSummary>,
}

impl CartSummary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CartEntry>) -> Self {
        let mut summary = Self {
            total_price: 0.0,
            total_quantity: 0,
            items: BTreeMap::new(),
        };

        for entry in entries {
            summary.total_price += entry.line_price();
            summary.total_quantity += u64::from(entry.quantity);
            summary.items.insert(
                entry.product_id(),
                CartItemSummary {
                    name: entry.product.name.clone(),
                    quantity: entry.quantity,
                },
            );
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
