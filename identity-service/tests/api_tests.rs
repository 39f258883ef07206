mod common;

use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_login_success_returns_token_for_user() {
    let app = TestApp::spawn().await;

    let response = app.login("john", "password123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["access_token"]
        .as_str()
        .expect("access_token missing");

    let subject = app
        .authenticator
        .verify_token(token)
        .expect("Issued token does not validate");
    assert_eq!(subject, "john");
}

#[tokio::test]
async fn test_every_registered_user_can_login() {
    let app = TestApp::spawn().await;

    for (username, password) in [("john", "password123"), ("jane", "qwerty456")] {
        let response = app.login(username, password).await;
        assert_eq!(response.status(), StatusCode::OK, "login failed for {username}");
    }
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app.login("john", "qwerty456").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user_is_indistinguishable() {
    let app = TestApp::spawn().await;

    let unknown = app.login("nobody", "password123").await;
    let wrong = app.login("jane", "password123").await;

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown_body: serde_json::Value = unknown.json().await.unwrap();
    let wrong_body: serde_json::Value = wrong.json().await.unwrap();
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/login")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
