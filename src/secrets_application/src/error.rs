use secrets_core::{IdentityProviderError, UserStoreError};

/// Failures surfaced by the authentication and secrets use cases.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Username is already taken")]
    DuplicateUsername,
    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),
    #[error("The session user no longer exists")]
    UnknownUser,
    #[error("Persistence error: {0}")]
    PersistenceError(String),
    #[error("Session could not be decoded: {0}")]
    SessionDecodeError(String),
}

impl From<IdentityProviderError> for AuthError {
    fn from(error: IdentityProviderError) -> Self {
        AuthError::AuthorizationFailed(error.to_string())
    }
}

impl AuthError {
    /// Fallback mapping for store errors a use case has no specific meaning for.
    pub(crate) fn persistence(error: UserStoreError) -> Self {
        AuthError::PersistenceError(error.to_string())
    }
}
