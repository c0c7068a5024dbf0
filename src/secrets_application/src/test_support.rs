use std::{collections::HashMap, sync::Arc};

use secrecy::{ExposeSecret, Secret};
use secrets_core::{
    FederatedIdentity, Password, User, UserId, UserStore, UserStoreError, Username,
};
use tokio::sync::RwLock;

// Mock user store for testing. Passwords are kept as-is in place of a hash.
#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<UserId, User>>>,
    pub fail: bool,
}

impl MockUserStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), UserStoreError> {
        if self.fail {
            return Err(UserStoreError::UnexpectedError("store is down".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, UserStoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username() == Some(&username)) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = User::local(username, password.as_ref().clone());
        users.insert(*user.id(), user.clone());
        Ok(user)
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        self.check()?;
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.username() == Some(username))
            .ok_or(UserStoreError::UserNotFound)?;
        match user.password_hash() {
            Some(stored) if stored.expose_secret() == password.as_ref().expose_secret() => {
                Ok(user.clone())
            }
            _ => Err(UserStoreError::IncorrectPassword),
        }
    }

    async fn find_or_create_federated(
        &self,
        identity: &FederatedIdentity,
    ) -> Result<User, UserStoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if let Some(user) = users.values().find(|u| u.matches(identity)) {
            return Ok(user.clone());
        }
        let user = User::federated(identity);
        users.insert(*user.id(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.check()?;
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_secret(&self, id: &UserId, secret: String) -> Result<(), UserStoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;
        user.set_secret(secret);
        Ok(())
    }

    async fn users_with_secrets(&self) -> Result<Vec<User>, UserStoreError> {
        self.check()?;
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.secret().is_some())
            .cloned()
            .collect())
    }
}

pub fn username(raw: &str) -> Username {
    Username::parse(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}
