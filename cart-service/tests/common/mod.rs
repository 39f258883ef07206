use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use cart_service::config::default_products;
use cart_service::domain::cart::service::CartService;
use cart_service::inbound::http::router::create_router;
use cart_service::outbound::repositories::InMemoryCartRepository;
use cart_service::outbound::repositories::InMemoryProductCatalog;
use cart_service::CartScope;
use chrono::Duration;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application with the default catalog and one shared cart
    pub async fn spawn() -> Self {
        Self::spawn_with_scope(CartScope::Shared).await
    }

    pub async fn spawn_with_scope(cart_scope: CartScope) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, Duration::hours(1)));

        let catalog = InMemoryProductCatalog::from_config(&default_products())
            .expect("Failed to load catalog");
        let cart_service = Arc::new(CartService::new(
            Arc::new(InMemoryCartRepository::new()),
            Arc::new(catalog),
        ));
        let router = create_router(cart_service, Arc::clone(&authenticator), cart_scope);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// A valid token for `subject`, signed with the shared test secret
    pub fn token_for(&self, subject: &str) -> String {
        self.authenticator
            .issue_token(subject)
            .expect("Failed to issue token")
            .access_token
    }

    /// A correctly signed token whose expiry lies in the past
    pub fn expired_token_for(&self, subject: &str) -> String {
        let claims = Claims::new()
            .with_subject(subject)
            .with_expiration((Utc::now() - Duration::minutes(5)).timestamp());

        JwtHandler::new(TEST_SECRET)
            .encode(&claims)
            .expect("Failed to encode claims")
    }

    /// A token for `subject` signed with a key this server does not know
    pub fn foreign_token_for(&self, subject: &str) -> String {
        Authenticator::new(
            b"some-other-secret-key-of-sufficient-length!!",
            Duration::hours(1),
        )
        .issue_token(subject)
        .expect("Failed to issue token")
        .access_token
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn add(&self, token: &str, product_id: u32, quantity: i64) -> reqwest::Response {
        self.api_client
            .post(self.url(&format!("/cart/add/{}?quantity={}", product_id, quantity)))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn update(&self, token: &str, product_id: u32, quantity: i64) -> reqwest::Response {
        self.api_client
            .put(self.url(&format!(
                "/cart/update/{}?quantity={}",
                product_id, quantity
            )))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, token: &str, product_id: u32) -> reqwest::Response {
        self.api_client
            .delete(self.url(&format!("/cart/delete/{}", product_id)))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn view(&self, token: &str) -> reqwest::Response {
        self.api_client
            .get(self.url("/cart"))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// GET /cart without an Authorization header
    pub async fn view_anonymous(&self) -> reqwest::Response {
        self.api_client
            .get(self.url("/cart"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Cart contents as seen by a fresh valid token
    pub async fn cart_body(&self) -> serde_json::Value {
        self.view(&self.token_for("inspector"))
            .await
            .json()
            .await
            .expect("Failed to parse cart")
    }
}
