// https://www.site24x7.com/help/api/#authentication

use crate::domain::model::{AuthToken, CachedToken};
use crate::domain::ports::{ConfigProvider, TokenStore};
use crate::utils::error::{Result, Site24x7Error};
use crate::utils::validation::validate_required_field;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

pub const TOKEN_PATH: &str = "/oauth/v2/token";

/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_EXPIRES_IN: i64 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct AccessGrant {
    pub access_token: String,
    pub expires_in: i64,
}

/// Client for the Zoho accounts token endpoint.
pub struct AuthClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    timeout: Duration,
}

impl AuthClient {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client_id = *validate_required_field("auth.client_id", &config.client_id())?;
        let client_secret =
            *validate_required_field("auth.client_secret", &config.client_secret())?;

        Ok(Self::new(
            config.auth_base_url(),
            client_id,
            client_secret,
            config.request_timeout(),
        ))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Exchanges a one-time grant token for a long-lived refresh token.
    pub async fn exchange_grant_token(&self, grant_token: &str) -> Result<String> {
        let token = self
            .request_token(&[("code", grant_token), ("grant_type", "authorization_code")])
            .await?;

        token
            .refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Site24x7Error::AuthenticationError {
                message: "The token endpoint did not return a refresh token".to_string(),
            })
    }

    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessGrant> {
        let token = self
            .request_token(&[
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .await?;

        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Site24x7Error::AuthenticationError {
                message: "The token endpoint did not return an access token".to_string(),
            })?;

        Ok(AccessGrant {
            access_token,
            expires_in: token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        })
    }

    /// Posts form data to the token endpoint. The body is parsed whatever
    /// the status code because errors are reported in the `error` field.
    async fn request_token(&self, params: &[(&str, &str)]) -> Result<AuthToken> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), TOKEN_PATH);

        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        form.extend_from_slice(params);

        let grant_type = params
            .iter()
            .find(|(k, _)| *k == "grant_type")
            .map(|(_, v)| *v)
            .unwrap_or_default();
        tracing::debug!("Requesting token from {} (grant_type={})", url, grant_type);

        let response = self
            .client
            .post(&url)
            .form(&form)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Token endpoint responded with {}", status);

        let token: AuthToken = serde_json::from_str(&body).map_err(|_| {
            Site24x7Error::AuthenticationError {
                message: format!("Unexpected response from the token endpoint ({})", status),
            }
        })?;

        if let Some(error) = token.error.as_deref() {
            return Err(Site24x7Error::AuthenticationError {
                message: format!("Site24x7 returned an error response ({})", error),
            });
        }

        Ok(token)
    }
}

/// Hands out access tokens, reusing the cached one until it nears expiry.
pub struct TokenManager<S: TokenStore> {
    auth: AuthClient,
    store: S,
    refresh_token: String,
}

impl<S: TokenStore> TokenManager<S> {
    pub fn new(auth: AuthClient, store: S, refresh_token: impl Into<String>) -> Self {
        Self {
            auth,
            store,
            refresh_token: refresh_token.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, store: S) -> Result<Self> {
        let auth = AuthClient::from_config(config)?;
        let refresh_token =
            *validate_required_field("auth.refresh_token", &config.refresh_token())?;

        Ok(Self::new(auth, store, refresh_token))
    }

    pub async fn access_token(&self) -> Result<String> {
        let now = Utc::now();

        match self.store.load().await {
            Ok(Some(cached)) if cached.is_usable(self.auth.client_id(), now) => {
                tracing::debug!("Using cached access token (expires {})", cached.expires_at);
                return Ok(cached.access_token);
            }
            Ok(_) => tracing::debug!("No usable cached access token"),
            Err(e) => tracing::warn!("Ignoring unreadable token cache: {}", e),
        }

        let grant = self.auth.refresh_access_token(&self.refresh_token).await?;
        tracing::info!("Obtained a new access token (expires in {}s)", grant.expires_in);

        let cached = CachedToken::new(
            grant.access_token.clone(),
            grant.expires_in,
            self.auth.client_id(),
            now,
        );
        if let Err(e) = self.store.save(&cached).await {
            tracing::warn!("Unable to cache access token: {}", e);
        }

        Ok(grant.access_token)
    }
}
