use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::Password,
    provider::FederatedIdentity,
    user::{User, UserId},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a local account, hashing `password` with a fresh salt.
    async fn add_user(&self, username: Username, password: Password)
    -> Result<User, UserStoreError>;

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError>;

    /// Look up the user linked to `identity`, inserting one if none exists.
    /// Implementations must do this as one atomic step.
    async fn find_or_create_federated(
        &self,
        identity: &FederatedIdentity,
    ) -> Result<User, UserStoreError>;

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;

    async fn set_secret(&self, id: &UserId, secret: String) -> Result<(), UserStoreError>;

    async fn users_with_secrets(&self) -> Result<Vec<User>, UserStoreError>;
}
