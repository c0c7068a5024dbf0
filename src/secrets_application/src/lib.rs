pub mod error;
pub mod use_cases;

pub use error::AuthError;
pub use use_cases::{
    federated_login::{FederatedLoginResponse, FederatedLoginUseCase},
    list_secrets::ListSecretsUseCase,
    login::LoginUseCase,
    register::RegisterUseCase,
    submit_secret::SubmitSecretUseCase,
};

#[cfg(test)]
pub(crate) mod test_support;
