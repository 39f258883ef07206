use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::cart::models::CartScope;

/// Application configuration for cart-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cart: CartConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token verification configuration.
///
/// Must carry identity-service's secret for its tokens to validate here.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JwtConfig {
    pub secret: Option<String>,
}

/// Cart partitioning configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CartConfig {
    #[serde(default)]
    pub scope: CartScope,
}

/// Product catalog seed.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub products: Vec<ProductConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProductConfig {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub quantity: u32,
}

pub fn default_products() -> Vec<ProductConfig> {
    vec![
        ProductConfig {
            id: 1,
            name: "Product 1".to_string(),
            image: "image1.avif".to_string(),
            price: 10.0,
            quantity: 5,
        },
        ProductConfig {
            id: 2,
            name: "Product 2".to_string(),
            image: "image2.jpg".to_string(),
            price: 20.0,
            quantity: 10,
        },
        ProductConfig {
            id: 3,
            name: "Product 3".to_string(),
            image: "image3.jpg".to_string(),
            price: 15.0,
            quantity: 8,
        },
    ]
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (SERVER__HTTP_PORT, JWT__SECRET, CART__SCOPE, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8001)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: CART__SCOPE=per_user overrides cart.scope
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
