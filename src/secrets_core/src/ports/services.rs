use async_trait::async_trait;
use thiserror::Error;

use crate::domain::provider::{FederatedIdentity, Provider};

/// Where to send the browser to start an authorization-code flow, and the
/// CSRF state the callback must echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
}

/// Profile data resolved from a provider after a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub provider: Provider,
    pub subject: String,
    pub picture: Option<String>,
}

impl ProviderProfile {
    pub fn identity(&self) -> FederatedIdentity {
        FederatedIdentity::new(self.provider, self.subject.clone())
    }
}

#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Invalid provider configuration: {0}")]
    Configuration(String),
    #[error("Code exchange failed: {0}")]
    CodeExchange(String),
    #[error("Profile request failed: {0}")]
    Profile(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> Provider;

    fn authorization_request(&self) -> AuthorizationRequest;

    async fn exchange_code(&self, code: String) -> Result<ProviderProfile, IdentityProviderError>;
}
