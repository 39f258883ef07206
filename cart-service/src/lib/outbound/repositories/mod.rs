pub mod cart;
pub mod catalog;

pub use cart::InMemoryCartRepository;
pub use catalog::InMemoryProductCatalog;
