use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use serde_json::json;
use site24x7_cli::app;
use site24x7_cli::config::toml_config::{token_cache_path, ConfigFile};
use site24x7_cli::core::session;
use site24x7_cli::domain::model::ApiRequest;
use site24x7_cli::domain::ports::{Fetcher, TokenStore};
use site24x7_cli::{Cli, FileTokenStore, Settings, Site24x7Error};
use std::path::Path;
use tempfile::TempDir;

fn settings_for(server: &MockServer, dir: &Path, refresh_token: Option<&str>) -> Settings {
    let mut file = ConfigFile::default();
    file.auth.client_id = Some("1000.CLIENT".to_string());
    file.auth.client_secret = Some("secret".to_string());
    file.auth.refresh_token = refresh_token.map(str::to_string);
    file.auth.base_url = Some(server.base_url());
    file.api.base_url = Some(server.url("/api"));

    Settings::from_parts(dir.join("site24x7.toml"), file, true, |_| None)
}

/// Refresh token -> access token -> authenticated API call, with the access
/// token cached on disk for the next invocation.
#[tokio::test]
async fn test_session_refreshes_and_caches_token() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let settings = settings_for(&server, temp_dir.path(), Some("1000.REFRESH"));

    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/oauth/v2/token")
            .x_www_form_urlencoded_tuple("grant_type", "refresh_token")
            .x_www_form_urlencoded_tuple("refresh_token", "1000.REFRESH")
            .x_www_form_urlencoded_tuple("client_id", "1000.CLIENT");
        then.status(200).json_body(json!({
            "access_token": "1000.ACCESS",
            "expires_in": 3600,
            "api_domain": "https://www.zohoapis.com",
            "token_type": "Bearer"
        }));
    });
    let users_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users")
            .header("Authorization", "Zoho-oauthtoken 1000.ACCESS");
        then.status(200)
            .json_body(json!({"code": 0, "message": "success", "data": []}));
    });

    let store = FileTokenStore::new(settings.token_cache_path());
    let client = session::open(&settings, store.clone()).await?;
    client.fetch(ApiRequest::get("/users")).await?;

    // Second invocation reuses the cached token
    let client = session::open(&settings, store.clone()).await?;
    client.fetch(ApiRequest::get("/users")).await?;

    token_mock.assert_hits(1);
    users_mock.assert_hits(2);

    let cached = store.load().await?.expect("token should be cached");
    assert_eq!(cached.access_token, "1000.ACCESS");
    assert_eq!(cached.client_id, "1000.CLIENT");
    assert!(settings.token_cache_path().exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_refresh_token_is_config_error() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let settings = settings_for(&server, temp_dir.path(), None);

    let store = FileTokenStore::new(settings.token_cache_path());
    let err = match session::open(&settings, store).await {
        Ok(_) => panic!("session should not open without a refresh token"),
        Err(e) => e,
    };

    assert!(matches!(err, Site24x7Error::MissingConfigError { ref field } if field == "auth.refresh_token"));
    assert_eq!(err.severity().exit_code(), 3);
    Ok(())
}

#[tokio::test]
async fn test_rejected_refresh_token() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let settings = settings_for(&server, temp_dir.path(), Some("revoked"));

    server.mock(|when, then| {
        when.method(POST).path("/oauth/v2/token");
        then.status(200).json_body(json!({"error": "invalid_code"}));
    });

    let store = FileTokenStore::new(settings.token_cache_path());
    let err = match session::open(&settings, store).await {
        Ok(_) => panic!("session should not open with a revoked token"),
        Err(e) => e,
    };

    assert!(matches!(err, Site24x7Error::AuthenticationError { .. }));
    assert!(err.to_string().contains("invalid_code"));
    assert!(!settings.token_cache_path().exists());
    Ok(())
}

#[tokio::test]
async fn test_rejected_access_token_clears_cache() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("site24x7.toml");

    let mut file = ConfigFile::default();
    file.auth.client_id = Some("1000.CLIENT".to_string());
    file.auth.client_secret = Some("secret".to_string());
    file.auth.refresh_token = Some("1000.REFRESH".to_string());
    file.auth.base_url = Some(server.base_url());
    file.api.base_url = Some(server.url("/api"));
    file.save_to_file(&path)?;

    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/oauth/v2/token");
        then.status(200)
            .json_body(json!({"access_token": "1000.ACCESS", "expires_in": 3600}));
    });
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(401)
            .json_body(json!({"code": 1102, "message": "Invalid OAuth token"}));
    });

    let config = path.display().to_string();
    for _ in 0..2 {
        let cli = Cli::try_parse_from(["site24x7", "--config", config.as_str(), "user", "list"])?;
        let err = app::run(cli).await.unwrap_err();

        assert!(matches!(err, Site24x7Error::AuthenticationError { .. }));
        assert!(!token_cache_path(&path).exists());
    }

    // Each run had to refresh because the rejected token was not kept
    token_mock.assert_hits(2);
    users_mock.assert_hits(2);
    Ok(())
}
