pub mod env {
    pub const SESSION_SECRET_ENV_VAR: &str = "OUR_SECRET";
    pub const GOOGLE_CLIENT_ID_ENV_VAR: &str = "CLIENT_ID";
    pub const GOOGLE_CLIENT_SECRET_ENV_VAR: &str = "CLIENT_SECRET";
    pub const FACEBOOK_CLIENT_ID_ENV_VAR: &str = "FACEBOOK_CLIENT_ID";
    pub const FACEBOOK_CLIENT_SECRET_ENV_VAR: &str = "FACEBOOK_CLIENT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    /// Prefix for nested overrides, e.g. `SECRETS__SESSION__SECURE_COOKIE=true`.
    pub const SETTINGS_ENV_PREFIX: &str = "SECRETS";
}

pub const SETTINGS_FILE: &str = "config/settings";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ASSETS_DIR: &str = "public";
    pub const GOOGLE_REDIRECT_URL: &str = "http://localhost:3000/auth/google/secrets";
    pub const FACEBOOK_REDIRECT_URL: &str = "http://localhost:3000/oauth2/redirect/facebook";
    pub const SESSION_COOKIE_NAME: &str = "secrets.sid";
    pub const SESSION_TTL_IN_SECONDS: i64 = 60 * 60 * 24;
    /// Upper bound on sessions held by the in-memory session store.
    pub const SESSION_CACHE_CAPACITY: u64 = 10_000;
    pub const EXPIRED_SESSION_DELETION_INTERVAL_IN_SECONDS: u64 = 60;
    pub const DATABASE_MAX_CONNECTIONS: i64 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
