use reqwest::StatusCode;

use crate::helpers::{FailingUserStore, TestApp, assert_is_redirect_to, get_random_username};

async fn failing_app() -> TestApp<FailingUserStore> {
    TestApp::with_store(FailingUserStore::new()).await
}

#[tokio::test]
async fn secrets_listing_renders_the_error_page_when_the_store_fails() {
    let app = failing_app().await;
    app.user_store.fail();

    let response = app.get("/secrets").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.unwrap();
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("connection refused"));
}

#[tokio::test]
async fn submit_renders_the_error_page_when_the_store_fails() {
    let app = failing_app().await;
    let response = app.post_register(&get_random_username(), "p").await;
    assert_is_redirect_to(&response, "/secrets");

    app.user_store.fail();
    let response = app.post_submit("x").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn federated_callback_renders_the_error_page_when_the_store_fails() {
    let app = failing_app().await;
    let state = app.begin_federated_login("/auth/google").await;

    app.user_store.fail();
    let response = app
        .get(&format!("/auth/google/secrets?code=good-123&state={state}"))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn login_renders_the_error_page_when_the_store_fails() {
    let app = failing_app().await;
    let username = get_random_username();
    app.post_register(&username, "p").await;
    app.get("/logout").await;

    app.user_store.fail();
    let response = app.post_login(&username, "p").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_is_redirect_to(&app.get("/submit").await, "/login");
}

#[tokio::test]
async fn register_redirects_back_to_the_form_when_the_store_fails() {
    let app = failing_app().await;
    app.user_store.fail();

    let response = app.post_register(&get_random_username(), "p").await;

    assert_is_redirect_to(&response, "/register");
    assert_is_redirect_to(&app.get("/submit").await, "/login");
}
