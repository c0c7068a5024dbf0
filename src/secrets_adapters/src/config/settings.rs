use config::{
    Config, ConfigError, Environment, File,
    builder::{ConfigBuilder, DefaultState},
};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{SETTINGS_FILE, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct SecretsSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub database: DatabaseSettings,
    pub google: OAuthClientSettings,
    pub facebook: OAuthClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Signs the session cookie. At least 64 bytes.
    pub secret: Secret<String>,
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub ttl_in_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Without a URL users are kept in memory for the lifetime of the process.
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthClientSettings {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub redirect_url: String,
}

impl SecretsSettings {
    /// Load settings from defaults, an optional `config/settings.*` file,
    /// `SECRETS__*` variables and finally the well-known variables such as `OUR_SECRET`.
    /// A `.env` file in the working directory is read first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let var = |name: &str| std::env::var(name).ok();

        with_defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("session.secret", var(env::SESSION_SECRET_ENV_VAR))?
            .set_override_option("google.client_id", var(env::GOOGLE_CLIENT_ID_ENV_VAR))?
            .set_override_option(
                "google.client_secret",
                var(env::GOOGLE_CLIENT_SECRET_ENV_VAR),
            )?
            .set_override_option("facebook.client_id", var(env::FACEBOOK_CLIENT_ID_ENV_VAR))?
            .set_override_option(
                "facebook.client_secret",
                var(env::FACEBOOK_CLIENT_SECRET_ENV_VAR),
            )?
            .set_override_option("database.url", var(env::DATABASE_URL_ENV_VAR))?
            .build()?
            .try_deserialize()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("application.address", prod::APP_ADDRESS)?
        .set_default("application.assets_dir", prod::ASSETS_DIR)?
        .set_default("session.cookie_name", prod::SESSION_COOKIE_NAME)?
        .set_default("session.secure_cookie", false)?
        .set_default("session.ttl_in_seconds", prod::SESSION_TTL_IN_SECONDS)?
        .set_default("database.max_connections", prod::DATABASE_MAX_CONNECTIONS)?
        .set_default("google.client_id", "")?
        .set_default("google.client_secret", "")?
        .set_default("google.redirect_url", prod::GOOGLE_REDIRECT_URL)?
        .set_default("facebook.client_id", "")?
        .set_default("facebook.client_secret", "")?
        .set_default("facebook.redirect_url", prod::FACEBOOK_REDIRECT_URL)
}
