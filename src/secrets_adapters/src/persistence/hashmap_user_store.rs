use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use secrets_core::{
    FederatedIdentity, Password, User, UserId, UserStore, UserStoreError, Username,
};

use super::password_hashing::{compute_password_hash, verify_password_hash};

/// In-process user store. Used when no database is configured, and in tests.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

/// Users by id, plus their creation order so listings are stable.
#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    created: Vec<UserId>,
}

impl Users {
    fn values(&self) -> impl Iterator<Item = &User> {
        self.created.iter().filter_map(|id| self.by_id.get(id))
    }

    fn insert(&mut self, user: User) {
        self.created.push(*user.id());
        self.by_id.insert(*user.id(), user);
    }
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, oldest first.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, UserStoreError> {
        // Hash before taking the lock; a racing duplicate is still caught below.
        let password_hash = compute_password_hash(password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        if users.values().any(|u| u.username() == Some(&username)) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User::local(username, password_hash);
        users.insert(user.clone());
        Ok(user)
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = {
            let users = self.users.read().await;
            users
                .values()
                .find(|u| u.username() == Some(username))
                .cloned()
                .ok_or(UserStoreError::UserNotFound)?
        };

        let Some(password_hash) = user.password_hash().cloned() else {
            return Err(UserStoreError::IncorrectPassword);
        };

        verify_password_hash(password_hash, password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(user)
    }

    async fn find_or_create_federated(
        &self,
        identity: &FederatedIdentity,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if let Some(user) = users.values().find(|u| u.matches(identity)) {
            return Ok(user.clone());
        }

        let user = User::federated(identity);
        tracing::info!(user_id = %user.id(), provider = %identity.provider(), "Created federated user");
        users.insert(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.by_id.get(id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn set_secret(&self, id: &UserId, secret: String) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.by_id.get_mut(id).ok_or(UserStoreError::UserNotFound)?;
        user.set_secret(secret);
        Ok(())
    }

    /// Oldest account first, matching the PostgreSQL store.
    async fn users_with_secrets(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.secret().is_some())
            .cloned()
            .collect())
    }
}
