use std::sync::Arc;

use auth::Authenticator;
use cart_service::config::Config;
use cart_service::domain::cart::service::CartService;
use cart_service::domain::catalog::ports::ProductCatalog;
use cart_service::inbound::http::router::create_router;
use cart_service::outbound::repositories::InMemoryCartRepository;
use cart_service::outbound::repositories::InMemoryProductCatalog;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cart_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "cart-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        shared_secret = config.jwt.secret.is_some(),
        cart_scope = ?config.cart.scope,
        "Configuration loaded"
    );

    // This service only verifies tokens, so the ttl is never used.
    let authenticator = Arc::new(match &config.jwt.secret {
        Some(secret) => Authenticator::new(secret.as_bytes(), Duration::hours(1)),
        None => {
            tracing::warn!(
                "No JWT secret configured, verifying with a process-local key; \
                 tokens from identity-service will be rejected"
            );
            Authenticator::with_random_secret(Duration::hours(1))
        }
    });

    let catalog = Arc::new(InMemoryProductCatalog::from_config(
        &config.catalog.products,
    )?);
    let product_ids: Vec<u32> = catalog.list().await?.iter().map(|p| p.id.0).collect();
    tracing::info!(
        products = catalog.len(),
        product_ids = ?product_ids,
        "Product catalog loaded"
    );

    let cart_service = Arc::new(CartService::new(
        Arc::new(InMemoryCartRepository::new()),
        catalog,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(cart_service, authenticator, config.cart.scope);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
