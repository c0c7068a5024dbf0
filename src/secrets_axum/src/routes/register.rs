use axum::{Form, extract::State, response::Redirect};
use secrets_application::{AuthError, RegisterUseCase};
use secrets_core::{SessionUser, UserStore};
use tower_sessions::Session;

use super::{AppError, login::CredentialsForm};
use crate::session::establish_session;

/// Creates a local account and logs the new user in.
///
/// Every failure to create the account, a store outage included, sends the
/// visitor back to the registration form.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U>(
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
            tracing::warn!(error = %e, "Rejected registration form");
            return Ok(Redirect::to("/register"));
        }
    };

    match RegisterUseCase::new(user_store)
        .execute(username, password)
        .await
    {
        Ok(user) => {
            establish_session(&session, &SessionUser::from_user(&user, None)).await?;
            Ok(Redirect::to("/secrets"))
        }
        Err(AuthError::DuplicateUsername) => {
            tracing::warn!("Username already registered");
            Ok(Redirect::to("/register"))
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            Ok(Redirect::to("/register"))
        }
    }
}
