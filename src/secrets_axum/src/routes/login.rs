//! Local username/password login.

use axum::{Form, extract::State, response::Redirect};
use secrecy::Secret;
use secrets_application::{AuthError, LoginUseCase};
use secrets_core::{Password, SessionUser, UserError, UserStore, Username};
use serde::Deserialize;
use tower_sessions::Session;

use super::AppError;
use crate::session::establish_session;

/// Form body shared by `POST /login` and `POST /register`.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: Secret<String>,
}

impl CredentialsForm {
    pub fn parse(self) -> Result<(Username, Password), UserError> {
        let username = Username::parse(&self.username)?;
        let password = Password::parse(self.password)?;
        Ok((username, password))
    }
}

/// Verifies the credentials and starts an authenticated session.
///
/// Any credential failure redirects back to the login form. Unknown user and
/// wrong password are indistinguishable to the client. Store failures render
/// the error page.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U>(
    State(user_store): State<U>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, AppError>
where
    U: UserStore + Clone + 'static,
{
    let (username, password) = match form.parse() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected login form");
            return Ok(Redirect::to("/login"));
        }
    };

    match LoginUseCase::new(user_store).execute(username, password).await {
        Ok(user) => {
            establish_session(&session, &SessionUser::from_user(&user, None)).await?;
            Ok(Redirect::to("/secrets"))
        }
        Err(AuthError::InvalidCredentials) => Ok(Redirect::to("/login")),
        Err(e) => Err(e.into()),
    }
}
