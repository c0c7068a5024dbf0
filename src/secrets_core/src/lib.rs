pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    password::Password,
    provider::{FederatedIdentity, Provider},
    session_user::SessionUser,
    user::{User, UserError, UserId},
    username::Username,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{AuthorizationRequest, IdentityProvider, IdentityProviderError, ProviderProfile},
};
