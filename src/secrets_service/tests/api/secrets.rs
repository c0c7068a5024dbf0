use crate::helpers::{TestApp, assert_is_redirect_to, get_random_username};

#[tokio::test]
async fn submitted_secret_appears_in_the_listing() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.post_register(&username, "p").await;
    let page = app.secrets_page().await;
    assert!(!page.contains("secret-text\">x<"));

    let response = app.post_submit("x").await;
    assert_is_redirect_to(&response, "/secrets");

    let page = app.secrets_page().await;
    assert!(page.contains("<p class=\"secret-text\">x</p>"));
}

#[tokio::test]
async fn listing_never_reveals_authors() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.post_register(&username, "p").await;
    app.post_submit("my secret").await;

    let page = app.secrets_page().await;
    assert!(page.contains("my secret"));
    assert!(!page.contains(&username));
}

#[tokio::test]
async fn a_new_secret_replaces_the_old_one() {
    let app = TestApp::new().await;
    app.post_register(&get_random_username(), "p").await;

    app.post_submit("first").await;
    app.post_submit("second").await;

    let page = app.secrets_page().await;
    assert!(page.contains("second"));
    assert!(!page.contains("first"));
}

#[tokio::test]
async fn secrets_from_several_users_are_listed() {
    let app = TestApp::new().await;

    for secret in ["alpha", "beta"] {
        app.post_register(&get_random_username(), "p").await;
        app.post_submit(secret).await;
        app.get("/logout").await;
    }
    app.post_register(&get_random_username(), "p").await;

    let page = app.secrets_page().await;
    assert!(page.contains("alpha"));
    assert!(page.contains("beta"));
    assert_eq!(page.matches("class=\"secret-text\"").count(), 2);
}

#[tokio::test]
async fn anonymous_visitors_can_read_but_not_submit() {
    let app = TestApp::new().await;

    app.secrets_page().await;

    let response = app.get("/submit").await;
    assert_is_redirect_to(&response, "/login");

    let response = app.post_submit("sneaky").await;
    assert_is_redirect_to(&response, "/login");
    assert!(!app.secrets_page().await.contains("sneaky"));
}
