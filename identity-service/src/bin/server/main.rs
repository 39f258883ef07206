use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use identity_service::config::Config;
use identity_service::domain::credential::service::CredentialService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryCredentialRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        shared_secret = config.jwt.secret.is_some(),
        users = config.users.len(),
        "Configuration loaded"
    );

    let token_ttl = Duration::minutes(config.jwt.expiration_minutes);
    let authenticator = Arc::new(match &config.jwt.secret {
        Some(secret) => Authenticator::new(secret.as_bytes(), token_ttl),
        None => {
            tracing::warn!(
                "No JWT secret configured, signing with a process-local key; \
                 tokens will not validate in other services or after restart"
            );
            Authenticator::with_random_secret(token_ttl)
        }
    });

    let credential_repository = Arc::new(InMemoryCredentialRepository::from_config(
        &config.users,
        &authenticator,
    )?);
    tracing::info!(
        credentials = credential_repository.len(),
        "Credential store seeded"
    );

    let credential_service = Arc::new(CredentialService::new(
        credential_repository,
        Arc::clone(&authenticator),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(credential_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
