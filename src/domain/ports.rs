use crate::domain::model::{ApiRequest, ApiResponse, CachedToken};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn auth_base_url(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn client_id(&self) -> Option<&str>;
    fn client_secret(&self) -> Option<&str>;
    fn refresh_token(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
}

/// Persistence for the short-lived access token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Option<CachedToken>>> + Send;
    fn save(&self, token: &CachedToken) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Sends one request to the resource API and returns the unwrapped envelope.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Interactive input used by `config`.
pub trait Prompter {
    fn confirm(&self, prompt: &str) -> Result<bool>;
    fn input(&self, prompt: &str) -> Result<String>;
    fn secret(&self, prompt: &str) -> Result<String>;
}
