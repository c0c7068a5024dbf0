use std::fmt;

use serde::{Deserialize, Serialize};

/// Third-party identity providers users can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
        }
    }

    /// Name of the user field (and storage column) holding this provider's identifier.
    pub fn id_field(&self) -> &'static str {
        match self {
            Provider::Google => "google_id",
            Provider::Facebook => "facebook_id",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider-issued account identifier, scoped to its provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FederatedIdentity {
    provider: Provider,
    subject: String,
}

impl FederatedIdentity {
    pub fn new(provider: Provider, subject: impl Into<String>) -> Self {
        Self {
            provider,
            subject: subject.into(),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}
