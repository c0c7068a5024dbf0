use reqwest::StatusCode;

use crate::helpers::{TestApp, assert_is_redirect_to, get_random_username};

#[tokio::test]
async fn landing_and_form_pages_render() {
    let app = TestApp::new().await;

    for path in ["/", "/login", "/register"] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    let login = app.get("/login").await.text().await.unwrap();
    assert!(login.contains("action=\"/login\""));
}

#[tokio::test]
async fn register_logs_the_new_user_in() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let response = app.post_register(&username, "p").await;
    assert_is_redirect_to(&response, "/secrets");

    let response = app.get("/submit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let users = app.user_store.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username().map(|u| u.as_str()), Some(username.as_str()));
    assert!(users[0].google_id().is_none());
}

#[tokio::test]
async fn duplicate_username_redirects_back_to_register() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.post_register(&username, "p").await;
    app.get("/logout").await;

    let response = app.post_register(&username, "other").await;
    assert_is_redirect_to(&response, "/register");

    let response = app.get("/submit").await;
    assert_is_redirect_to(&response, "/login");
    assert_eq!(app.user_store.users().await.len(), 1);
}

#[tokio::test]
async fn blank_credentials_are_rejected() {
    let app = TestApp::new().await;

    let response = app.post_register("   ", "p").await;
    assert_is_redirect_to(&response, "/register");

    let response = app.post_register(&get_random_username(), "").await;
    assert_is_redirect_to(&response, "/register");

    assert!(app.user_store.users().await.is_empty());
}

#[tokio::test]
async fn login_with_correct_password_authenticates() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.post_register(&username, "p").await;
    app.get("/logout").await;

    let response = app.post_login(&username, "p").await;
    assert_is_redirect_to(&response, "/secrets");

    let response = app.get("/submit").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn failed_login_always_responds_with_redirect_to_login() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.post_register(&username, "p").await;
    app.get("/logout").await;

    let wrong_password = app.post_login(&username, "q").await;
    assert_is_redirect_to(&wrong_password, "/login");

    let unknown_user = app.post_login(&get_random_username(), "p").await;
    assert_is_redirect_to(&unknown_user, "/login");

    let response = app.get("/submit").await;
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn logout_returns_to_anonymous() {
    let app = TestApp::new().await;
    app.post_register(&get_random_username(), "p").await;

    let response = app.get("/logout").await;
    assert_is_redirect_to(&response, "/");

    let response = app.get("/submit").await;
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn logout_while_anonymous_is_harmless() {
    let app = TestApp::new().await;

    let response = app.get("/logout").await;
    assert_is_redirect_to(&response, "/");
}

#[tokio::test]
async fn missing_form_fields_are_rejected_by_the_extractor() {
    let app = TestApp::new().await;

    let response = app.post_form("/register", &[("username", "a")]).await;
    assert!(response.status().is_client_error());
    assert!(app.user_store.users().await.is_empty());
}
