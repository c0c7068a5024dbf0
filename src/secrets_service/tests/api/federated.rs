use reqwest::StatusCode;

use crate::helpers::{TestApp, assert_is_redirect_to};

#[tokio::test]
async fn google_login_creates_and_then_reuses_the_linked_user() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    let response = app
        .get(&format!("/auth/google/secrets?code=good-123&state={state}"))
        .await;
    assert_is_redirect_to(&response, "/secrets");
    assert_eq!(app.get("/submit").await.status(), StatusCode::OK);

    app.get("/logout").await;
    let state = app.begin_federated_login("/auth/google").await;
    let response = app
        .get(&format!("/auth/google/secrets?code=good-123&state={state}"))
        .await;
    assert_is_redirect_to(&response, "/secrets");

    let users = app.user_store.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].google_id(), Some("123"));
    assert!(users[0].username().is_none());
}

#[tokio::test]
async fn facebook_login_links_a_separate_user() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    app.get(&format!("/auth/google/secrets?code=good-123&state={state}"))
        .await;
    app.get("/logout").await;

    let state = app.begin_federated_login("/auth/facebook").await;
    let response = app
        .get(&format!("/oauth2/redirect/facebook?code=good-123&state={state}"))
        .await;
    assert_is_redirect_to(&response, "/secrets");

    let users = app.user_store.users().await;
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.facebook_id() == Some("123")));
}

#[tokio::test]
async fn facebook_flow_can_start_from_the_federated_alias() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/login/federated/facebook").await;
    let response = app
        .get(&format!("/oauth2/redirect/facebook?code=good-9&state={state}"))
        .await;

    assert_is_redirect_to(&response, "/secrets");
}

#[tokio::test]
async fn federated_user_can_submit_a_secret() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    app.get(&format!("/auth/google/secrets?code=good-7&state={state}"))
        .await;
    app.post_submit("from google").await;

    assert!(app.secrets_page().await.contains("from google"));
}

#[tokio::test]
async fn mismatched_state_redirects_to_login() {
    let app = TestApp::new().await;

    app.begin_federated_login("/auth/google").await;
    let response = app
        .get("/auth/google/secrets?code=good-123&state=forged")
        .await;

    assert_is_redirect_to(&response, "/login");
    assert!(app.user_store.users().await.is_empty());
}

#[tokio::test]
async fn callback_without_a_started_flow_redirects_to_login() {
    let app = TestApp::new().await;

    let response = app
        .get("/auth/google/secrets?code=good-123&state=google-state-0")
        .await;

    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn state_cannot_be_replayed() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    let callback = format!("/auth/google/secrets?code=good-1&state={state}");
    assert_is_redirect_to(&app.get(&callback).await, "/secrets");

    app.get("/logout").await;
    assert_is_redirect_to(&app.get(&callback).await, "/login");
}

#[tokio::test]
async fn state_issued_for_one_provider_is_refused_by_the_other() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    let response = app
        .get(&format!("/oauth2/redirect/facebook?code=good-1&state={state}"))
        .await;

    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn provider_denial_redirects_to_login() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    let response = app
        .get(&format!(
            "/auth/google/secrets?error=access_denied&state={state}"
        ))
        .await;

    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn failed_code_exchange_redirects_to_login() {
    let app = TestApp::new().await;

    let state = app.begin_federated_login("/auth/google").await;
    let response = app
        .get(&format!("/auth/google/secrets?code=bad&state={state}"))
        .await;

    assert_is_redirect_to(&response, "/login");
    assert_is_redirect_to(&app.get("/submit").await, "/login");
}
