//! Session state machine on top of tower-sessions.
//!
//! A request is `Anonymous` until a successful local or federated login stores a
//! [`SessionUser`] under [`SESSION_USER_KEY`]; logout flushes the session and the
//! request is `Anonymous` again. Sessions are referenced by a signed cookie and
//! dropped from the store once their inactivity expiry has passed.

use std::time::Duration;

use axum::{
    Router,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use secrecy::ExposeSecret;
use secrets_adapters::config::SessionSettings;
use secrets_application::AuthError;
use secrets_core::{Provider, SessionUser};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_sessions::{
    Expiry, Session, SessionManagerLayer, SessionStore,
    cookie::{Key, SameSite},
    session,
};
use tower_sessions_moka_store::MokaStore;

pub const SESSION_USER_KEY: &str = "user";
pub const OAUTH_STATE_KEY: &str = "oauth_state";

#[derive(Debug, Error, PartialEq)]
pub enum SessionConfigError {
    #[error("Session secret must be at least 64 bytes")]
    SecretTooShort,
    #[error("Invalid session ttl: {0}")]
    InvalidTtl(i64),
}

/// Cookie and expiry policy for the session layer.
#[derive(Clone)]
pub struct SessionConfig {
    cookie_name: String,
    key: Key,
    secure: bool,
    expiry: Expiry,
}

impl SessionConfig {
    pub fn from_settings(settings: &SessionSettings) -> Result<Self, SessionConfigError> {
        let key = Key::try_from(settings.secret.expose_secret().as_bytes())
            .map_err(|_| SessionConfigError::SecretTooShort)?;

        let ttl = u64::try_from(settings.ttl_in_seconds)
            .ok()
            .filter(|ttl| *ttl > 0)
            .ok_or(SessionConfigError::InvalidTtl(settings.ttl_in_seconds))?;
        let expiry = Expiry::OnInactivity(
            Duration::from_secs(ttl)
                .try_into()
                .map_err(|_| SessionConfigError::InvalidTtl(settings.ttl_in_seconds))?,
        );

        Ok(Self {
            cookie_name: settings.cookie_name.clone(),
            key,
            secure: settings.secure_cookie,
            expiry,
        })
    }
}

/// In-process session store holding at most `max_capacity` sessions. Entries
/// are evicted when their expiry passes.
pub fn in_memory_store(max_capacity: u64) -> MokaStore {
    MokaStore::new(Some(max_capacity))
}

/// Wraps `router` in the session manager so every request gets a [`Session`]
/// kept in `store`.
pub fn with_sessions<S, Store>(router: Router<S>, config: &SessionConfig, store: Store) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Store: SessionStore + Clone,
{
    let layer = SessionManagerLayer::new(store)
        .with_name(config.cookie_name.clone())
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.secure)
        .with_expiry(config.expiry.clone())
        .with_signed(config.key.clone());

    router.layer(layer)
}

/// Authentication state of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(SessionUser),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(current_user(&session).await)
    }
}

/// Resolves the session to an identity. A stored value that cannot be decoded
/// is logged and treated as anonymous.
pub async fn current_user(session: &Session) -> AuthState {
    match session.get::<SessionUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => AuthState::Authenticated(user),
        Ok(None) => AuthState::Anonymous,
        Err(e) => {
            let error = AuthError::SessionDecodeError(e.to_string());
            tracing::warn!(%error, "Treating request as anonymous");
            AuthState::Anonymous
        }
    }
}

/// `Anonymous -> Authenticated`. The session id is cycled first so a
/// pre-login session id cannot be reused.
pub async fn establish_session(session: &Session, user: &SessionUser) -> Result<(), session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user).await?;
    tracing::info!(user_id = %user.id, "Session established");
    Ok(())
}

/// `Authenticated -> Anonymous`. Removes the stored session and expires the cookie.
pub async fn destroy_session(session: &Session) -> Result<(), session::Error> {
    session.flush().await
}

/// An authorization-code flow that has been started but not yet called back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAuthorization {
    pub provider: Provider,
    pub state: String,
}

pub async fn store_pending_authorization(
    session: &Session,
    pending: &PendingAuthorization,
) -> Result<(), session::Error> {
    session.insert(OAUTH_STATE_KEY, pending).await
}

/// Removes and returns the pending authorization; a state can be used once.
pub async fn take_pending_authorization(
    session: &Session,
) -> Result<Option<PendingAuthorization>, session::Error> {
    session.remove(OAUTH_STATE_KEY).await
}
