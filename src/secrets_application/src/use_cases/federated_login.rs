use secrets_core::{IdentityProvider, ProviderProfile, User, UserStore};

use crate::error::AuthError;

/// Response from the federated login use case
#[derive(Debug)]
pub struct FederatedLoginResponse {
    pub user: User,
    pub profile: ProviderProfile,
}

/// Federated login use case - completes an authorization-code callback and
/// resolves the provider identifier to a local user
pub struct FederatedLoginUseCase<'a, U, P>
where
    U: UserStore,
    P: IdentityProvider + ?Sized,
{
    user_store: U,
    identity_provider: &'a P,
}

impl<'a, U, P> FederatedLoginUseCase<'a, U, P>
where
    U: UserStore,
    P: IdentityProvider + ?Sized,
{
    pub fn new(user_store: U, identity_provider: &'a P) -> Self {
        Self {
            user_store,
            identity_provider,
        }
    }

    /// Execute the federated login use case
    ///
    /// # Arguments
    /// * `code` - Authorization code returned by the provider
    ///
    /// # Returns
    /// The linked user (created on first sight of the identifier) with the
    /// provider profile, or `AuthError::AuthorizationFailed` if the exchange fails
    #[tracing::instrument(
        name = "FederatedLoginUseCase::execute",
        skip_all,
        fields(provider = %self.identity_provider.provider())
    )]
    pub async fn execute(&self, code: String) -> Result<FederatedLoginResponse, AuthError> {
        let profile = self.identity_provider.exchange_code(code).await?;

        let user = self
            .user_store
            .find_or_create_federated(&profile.identity())
            .await
            .map_err(AuthError::persistence)?;

        Ok(FederatedLoginResponse { user, profile })
    }
}
