use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use identity_service::config::UserConfig;
use identity_service::domain::credential::service::CredentialService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryCredentialRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application seeded with john/password123 and jane/qwerty456
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, Duration::hours(1)));

        let users = vec![
            UserConfig {
                username: "john".to_string(),
                password: Some("password123".to_string()),
                password_hash: None,
            },
            UserConfig {
                username: "jane".to_string(),
                password: Some("qwerty456".to_string()),
                password_hash: None,
            },
        ];
        let repository = Arc::new(
            InMemoryCredentialRepository::from_config(&users, &authenticator)
                .expect("Failed to seed credential store"),
        );

        let service = Arc::new(CredentialService::new(
            repository,
            Arc::clone(&authenticator),
        ));
        let router = create_router(service);

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

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to submit a login
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
