pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::cart::models::*;
pub use domain::cart::service::CartService;
pub use domain::catalog::models::*;
