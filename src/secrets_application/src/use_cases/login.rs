use secrets_core::{Password, User, UserStore, UserStoreError, Username};

use crate::error::AuthError;

/// Login use case - verifies local credentials
pub struct LoginUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> LoginUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the login use case
    ///
    /// Callers only ever see `InvalidCredentials` for a bad login; which of
    /// the two causes it was goes to the log.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, username: Username, password: Password) -> Result<User, AuthError> {
        match self.user_store.authenticate_user(&username, &password).await {
            Ok(user) => Ok(user),
            Err(UserStoreError::UserNotFound) => {
                tracing::warn!("Login attempt for unknown username");
                Err(AuthError::InvalidCredentials)
            }
            Err(UserStoreError::IncorrectPassword) => {
                tracing::warn!("Login attempt with incorrect password");
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => Err(AuthError::persistence(e)),
        }
    }
}
