//! Server-rendered pages.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::routes::AppError;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate;

/// Secrets are listed without any reference to their authors.
#[derive(Template)]
#[template(path = "secrets.html")]
pub struct SecretsTemplate {
    pub secrets: Vec<String>,
    pub authenticated: bool,
}

#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
}

/// Renders an askama template as an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => AppError::from(e).into_response(),
        }
    }
}
