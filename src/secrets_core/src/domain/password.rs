use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Plaintext password as submitted by the user. Only ever exposed to the hasher.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, UserError> {
        if raw.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
