//! OAuth2 authorization-code clients for the supported identity providers.

mod oauth2_identity_provider;
mod providers;

pub use oauth2_identity_provider::OAuth2IdentityProvider;
pub use providers::ProviderEndpoints;
