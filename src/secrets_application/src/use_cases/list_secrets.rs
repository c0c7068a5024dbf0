use secrets_core::UserStore;

use crate::error::AuthError;

/// List secrets use case - every submitted secret, without the account behind it
pub struct ListSecretsUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> ListSecretsUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ListSecretsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<String>, AuthError> {
        let users = self
            .user_store
            .users_with_secrets()
            .await
            .map_err(AuthError::persistence)?;

        Ok(users
            .into_iter()
            .filter_map(|user| user.secret().map(str::to_owned))
            .collect())
    }
}
