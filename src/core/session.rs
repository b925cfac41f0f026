use crate::core::auth::TokenManager;
use crate::core::client::ApiClient;
use crate::domain::ports::{ConfigProvider, TokenStore};
use crate::utils::error::Result;

/// Authenticates and returns a client ready for resource calls.
pub async fn open<C, S>(config: &C, store: S) -> Result<ApiClient>
where
    C: ConfigProvider,
    S: TokenStore,
{
    let tokens = TokenManager::from_config(config, store)?;
    let access_token = tokens.access_token().await?;

    Ok(ApiClient::new(
        config.api_base_url(),
        access_token,
        config.request_timeout(),
    ))
}
