use serde::{Deserialize, Serialize};

use super::user::{User, UserId};

/// Minimal identity kept in the server-side session for an authenticated visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: Option<String>,
    pub picture: Option<String>,
}

impl SessionUser {
    pub fn from_user(user: &User, picture: Option<String>) -> Self {
        Self {
            id: *user.id(),
            username: user.username().map(|u| u.as_str().to_owned()),
            picture,
        }
    }
}
