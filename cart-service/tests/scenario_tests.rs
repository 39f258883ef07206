mod common;

use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use common::TestApp;
use common::TEST_SECRET;
use identity_service::config::UserConfig;
use identity_service::domain::credential::service::CredentialService;
use identity_service::outbound::repositories::InMemoryCredentialRepository;
use reqwest::StatusCode;
use serde_json::json;

/// Start identity-service signing with the same secret as the cart service.
async fn spawn_identity_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    let authenticator = Arc::new(Authenticator::new(TEST_SECRET, Duration::minutes(60)));
    let users = [UserConfig {
        username: "john".to_string(),
        password: Some("password123".to_string()),
        password_hash: None,
    }];
    let repository = InMemoryCredentialRepository::from_config(&users, &authenticator)
        .expect("Failed to seed credential store");
    let router = identity_service::inbound::http::create_router(Arc::new(
        CredentialService::new(Arc::new(repository), authenticator),
    ));

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    address
}

#[tokio::test]
async fn test_login_then_shop() {
    let identity_address = spawn_identity_service().await;
    let cart = TestApp::spawn().await;

    let login: serde_json::Value = cart
        .api_client
        .post(format!("{}/login", identity_address))
        .json(&json!({ "username": "john", "password": "password123" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let token = login["access_token"].as_str().unwrap().to_string();

    assert_eq!(cart.add(&token, 1, 2).await.status(), StatusCode::OK);

    let body: serde_json::Value = cart.view(&token).await.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "total_price": 20.0,
            "total_quantity": 2,
            "cart_items": { "1": { "name": "Product 1", "quantity": 2 } }
        })
    );

    assert_eq!(cart.delete(&token, 1).await.status(), StatusCode::OK);

    let body: serde_json::Value = cart.view(&token).await.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "total_price": 0.0, "total_quantity": 0, "cart_items": {} })
    );
}

#[tokio::test]
async fn test_failed_login_yields_no_cart_access() {
    let identity_address = spawn_identity_service().await;
    let cart = TestApp::spawn().await;

    let response = cart
        .api_client
        .post(format!("{}/login", identity_address))
        .json(&json!({ "username": "john", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("access_token").is_none());

    assert_eq!(
        cart.view_anonymous().await.status(),
        StatusCode::UNAUTHORIZED
    );
}
