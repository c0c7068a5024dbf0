use oauth2::AuthType;

/// Endpoints and request shape of one OAuth2 provider.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub auth_url: String,
    pub token_url: String,
    /// Fetched with the access token as a bearer; must return the account id
    /// as `sub` or `id`.
    pub profile_url: String,
    pub scopes: Vec<String>,
    pub auth_type: AuthType,
}

impl ProviderEndpoints {
    pub fn google() -> Self {
        Self {
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            profile_url: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
            scopes: vec!["profile".to_string()],
            auth_type: AuthType::RequestBody,
        }
    }

    pub fn facebook() -> Self {
        Self {
            auth_url: "https://www.facebook.com/v19.0/dialog/oauth".to_string(),
            token_url: "https://graph.facebook.com/v19.0/oauth/access_token".to_string(),
            profile_url: "https://graph.facebook.com/v19.0/me?fields=id".to_string(),
            scopes: Vec::new(),
            auth_type: AuthType::RequestBody,
        }
    }
}
