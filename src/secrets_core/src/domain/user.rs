use std::fmt;

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{
    provider::{FederatedIdentity, Provider},
    username::Username,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("User has no identity")]
    MissingIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The single persisted account record.
///
/// A user carries at least one identity: local credentials, a Google id or a
/// Facebook id, in any combination. `secret` is `None` until one is submitted.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Option<Username>,
    password_hash: Option<Secret<String>>,
    google_id: Option<String>,
    facebook_id: Option<String>,
    secret: Option<String>,
}

impl User {
    /// New local account. `password_hash` is a PHC string carrying its own salt.
    pub fn local(username: Username, password_hash: Secret<String>) -> Self {
        Self {
            id: UserId::new(),
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secret: None,
        }
    }

    /// New account created on the first callback for an unseen provider identifier.
    /// Only that provider's identifier field is populated.
    pub fn federated(identity: &FederatedIdentity) -> Self {
        let subject = Some(identity.subject().to_owned());
        let (google_id, facebook_id) = match identity.provider() {
            Provider::Google => (subject, None),
            Provider::Facebook => (None, subject),
        };

        Self {
            id: UserId::new(),
            username: None,
            password_hash: None,
            google_id,
            facebook_id,
            secret: None,
        }
    }

    /// Rebuild a user from stored fields.
    pub fn parse(
        id: UserId,
        username: Option<String>,
        password_hash: Option<Secret<String>>,
        google_id: Option<String>,
        facebook_id: Option<String>,
        secret: Option<String>,
    ) -> Result<Self, UserError> {
        let username = username.map(Username::parse).transpose()?;

        if username.is_none() && google_id.is_none() && facebook_id.is_none() {
            return Err(UserError::MissingIdentity);
        }

        Ok(Self {
            id,
            username,
            password_hash,
            google_id,
            facebook_id,
            secret,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    pub fn password_hash(&self) -> Option<&Secret<String>> {
        self.password_hash.as_ref()
    }

    pub fn google_id(&self) -> Option<&str> {
        self.google_id.as_deref()
    }

    pub fn facebook_id(&self) -> Option<&str> {
        self.facebook_id.as_deref()
    }

    pub fn provider_id(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Google => self.google_id(),
            Provider::Facebook => self.facebook_id(),
        }
    }

    pub fn matches(&self, identity: &FederatedIdentity) -> bool {
        self.provider_id(identity.provider()) == Some(identity.subject())
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Replaces any previous secret. No history is kept.
    pub fn set_secret(&mut self, secret: String) {
        self.secret = Some(secret);
    }
}
