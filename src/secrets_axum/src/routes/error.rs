use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use secrets_application::AuthError;
use thiserror::Error;
use tower_sessions::session;

use crate::templates::ErrorTemplate;

/// Failures no redirect can recover from; rendered as a 500 page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Session store failure: {0}")]
    Session(#[from] session::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let message = "Please try again later.";
        let body = ErrorTemplate { message }
            .render()
            .unwrap_or_else(|_| message.to_string());

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
