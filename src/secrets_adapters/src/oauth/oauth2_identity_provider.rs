use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use secrecy::ExposeSecret;
use secrets_core::{
    AuthorizationRequest, IdentityProvider, IdentityProviderError, Provider, ProviderProfile,
};
use serde::Deserialize;

use super::providers::ProviderEndpoints;
use crate::config::OAuthClientSettings;

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Profile fields we consume. Google's userinfo names the account id `sub`,
/// Facebook's Graph API names it `id`.
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(alias = "sub")]
    id: String,
    #[serde(default)]
    picture: Option<String>,
}

/// Authorization-code flow against one provider.
pub struct OAuth2IdentityProvider {
    provider: Provider,
    client: ConfiguredClient,
    profile_url: String,
    scopes: Vec<String>,
    http_client: reqwest::Client,
}

impl OAuth2IdentityProvider {
    pub fn new(
        provider: Provider,
        settings: &OAuthClientSettings,
        endpoints: ProviderEndpoints,
    ) -> Result<Self, IdentityProviderError> {
        let configuration = |e: oauth2::url::ParseError| {
            IdentityProviderError::Configuration(format!("{provider}: {e}"))
        };

        let client = BasicClient::new(ClientId::new(settings.client_id.clone()))
            .set_client_secret(ClientSecret::new(
                settings.client_secret.expose_secret().clone(),
            ))
            .set_auth_uri(AuthUrl::new(endpoints.auth_url).map_err(configuration)?)
            .set_token_uri(TokenUrl::new(endpoints.token_url).map_err(configuration)?)
            .set_redirect_uri(
                RedirectUrl::new(settings.redirect_url.clone()).map_err(configuration)?,
            )
            .set_auth_type(endpoints.auth_type);

        // The token endpoint must not be allowed to redirect us elsewhere.
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| IdentityProviderError::Configuration(e.to_string()))?;

        Ok(Self {
            provider,
            client,
            profile_url: endpoints.profile_url,
            scopes: endpoints.scopes,
            http_client,
        })
    }

    pub fn google(settings: &OAuthClientSettings) -> Result<Self, IdentityProviderError> {
        Self::new(Provider::Google, settings, ProviderEndpoints::google())
    }

    pub fn facebook(settings: &OAuthClientSettings) -> Result<Self, IdentityProviderError> {
        Self::new(Provider::Facebook, settings, ProviderEndpoints::facebook())
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<ProfileResponse, reqwest::Error> {
        self.http_client
            .get(&self.profile_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait::async_trait]
impl IdentityProvider for OAuth2IdentityProvider {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn authorization_request(&self) -> AuthorizationRequest {
        let (url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .url();

        AuthorizationRequest {
            url: url.to_string(),
            state: csrf_state.secret().clone(),
        }
    }

    #[tracing::instrument(name = "Exchange authorization code", skip_all, fields(provider = %self.provider))]
    async fn exchange_code(&self, code: String) -> Result<ProviderProfile, IdentityProviderError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|e| IdentityProviderError::CodeExchange(e.to_string()))?;

        let profile = self
            .fetch_profile(token.access_token().secret())
            .await
            .map_err(|e| IdentityProviderError::Profile(e.to_string()))?;

        Ok(ProviderProfile {
            provider: self.provider,
            subject: profile.id,
            picture: profile.picture,
        })
    }
}
