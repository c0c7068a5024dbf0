use secrets_core::{UserId, UserStore, UserStoreError};

use crate::error::AuthError;

/// Submit secret use case - overwrites the requesting user's secret
pub struct SubmitSecretUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> SubmitSecretUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the submit secret use case
    ///
    /// Concurrent submissions by the same user are unordered; the last write wins.
    #[tracing::instrument(name = "SubmitSecretUseCase::execute", skip(self, secret))]
    pub async fn execute(&self, user_id: UserId, secret: String) -> Result<(), AuthError> {
        self.user_store
            .set_secret(&user_id, secret)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AuthError::UnknownUser,
                e => AuthError::persistence(e),
            })
    }
}
