//! Authorization-code login against a third-party provider.
//!
//! `begin_federated_login` remembers a fresh CSRF state in the session and sends
//! the visitor to the provider. `complete_federated_login` handles the callback:
//! the returned state must match the remembered one, the code is exchanged for
//! the provider account id and that id is linked to a local user.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use secrets_application::{AuthError, FederatedLoginResponse, FederatedLoginUseCase};
use secrets_core::{IdentityProvider, SessionUser, UserStore};
use serde::Deserialize;
use tower_sessions::Session;

use super::AppError;
use crate::session::{
    PendingAuthorization, establish_session, store_pending_authorization,
    take_pending_authorization,
};

/// Router state for one provider's routes.
#[derive(Clone)]
pub struct FederatedState<U> {
    pub user_store: U,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

impl<U> FederatedState<U> {
    pub fn new(user_store: U, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            user_store,
            identity_provider,
        }
    }
}

/// Query string of the provider callback.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[tracing::instrument(name = "Begin federated login", skip_all)]
pub async fn begin_federated_login<U>(
    State(federated): State<FederatedState<U>>,
    session: Session,
) -> Result<Redirect, AppError>
where
    U: UserStore + Clone + 'static,
{
    let request = federated.identity_provider.authorization_request();
    let pending = PendingAuthorization {
        provider: federated.identity_provider.provider(),
        state: request.state,
    };
    store_pending_authorization(&session, &pending).await?;

    Ok(Redirect::to(&request.url))
}

#[tracing::instrument(name = "Complete federated login", skip_all)]
pub async fn complete_federated_login<U>(
    State(federated): State<FederatedState<U>>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AppError>
where
    U: UserStore + Clone + 'static,
{
    let pending = take_pending_authorization(&session).await?;
    tracing::debug!(provider = %federated.identity_provider.provider(), "Provider callback");

    match authorize(&federated, pending, params).await {
        Ok(FederatedLoginResponse { user, profile }) => {
            let session_user = SessionUser::from_user(&user, profile.picture);
            establish_session(&session, &session_user).await?;
            Ok(Redirect::to("/secrets"))
        }
        Err(e @ AuthError::PersistenceError(_)) => Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Federated login failed");
            Ok(Redirect::to("/login"))
        }
    }
}

async fn authorize<U>(
    federated: &FederatedState<U>,
    pending: Option<PendingAuthorization>,
    params: CallbackParams,
) -> Result<FederatedLoginResponse, AuthError>
where
    U: UserStore + Clone,
{
    if let Some(error) = params.error {
        let description = params.error_description.unwrap_or_default();
        return Err(AuthError::AuthorizationFailed(format!(
            "provider denied the request: {error} {description}"
        )));
    }

    let provider = federated.identity_provider.provider();
    let expected = pending
        .filter(|pending| pending.provider == provider)
        .map(|pending| pending.state);
    match (expected, params.state) {
        (Some(expected), Some(returned)) if expected == returned => {}
        _ => {
            return Err(AuthError::AuthorizationFailed(
                "state does not match the pending authorization".to_string(),
            ));
        }
    }

    let code = params.code.ok_or_else(|| {
        AuthError::AuthorizationFailed("callback carried no authorization code".to_string())
    })?;

    FederatedLoginUseCase::new(
        federated.user_store.clone(),
        federated.identity_provider.as_ref(),
    )
    .execute(code)
    .await
}
