use secrets_core::{Password, User, UserStore, UserStoreError, Username};

use crate::error::AuthError;

/// Register use case - creates a local account
pub struct RegisterUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> RegisterUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The newly created user, or `AuthError::DuplicateUsername` if the name is taken.
    /// An existing record is never modified.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, username: Username, password: Password) -> Result<User, AuthError> {
        self.user_store
            .add_user(username, password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => AuthError::DuplicateUsername,
                e => AuthError::persistence(e),
            })
    }
}
