use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use secrets_application::{AuthError, SubmitSecretUseCase};
use secrets_core::UserStore;
use serde::Deserialize;
use tower_sessions::Session;

use super::AppError;
use crate::{
    session::{AuthState, destroy_session},
    templates::{HtmlTemplate, SubmitTemplate},
};

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub secret: String,
}

pub async fn submit_form(auth: AuthState) -> Response {
    match auth {
        AuthState::Authenticated(_) => HtmlTemplate(SubmitTemplate).into_response(),
        AuthState::Anonymous => Redirect::to("/login").into_response(),
    }
}

/// Overwrites the requester's secret.
///
/// A session whose user has disappeared from the store is destroyed and the
/// visitor is sent to log in again.
#[tracing::instrument(name = "Submit secret", skip_all)]
pub async fn submit<U>(
    State(user_store): State<U>,
    session: Session,
    auth: AuthState,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, AppError>
where
    U: UserStore + Clone + 'static,
{
    let AuthState::Authenticated(user) = auth else {
        return Ok(Redirect::to("/login"));
    };

    match SubmitSecretUseCase::new(user_store)
        .execute(user.id, form.secret)
        .await
    {
        Ok(()) => Ok(Redirect::to("/secrets")),
        Err(AuthError::UnknownUser) => {
            tracing::warn!(user_id = %user.id, "Session refers to a missing user");
            destroy_session(&session).await?;
            Ok(Redirect::to("/login"))
        }
        Err(e) => Err(e.into()),
    }
}
