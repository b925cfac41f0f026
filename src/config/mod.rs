#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml_config::{token_cache_path, ConfigFile};

pub use toml_config::DataCenter;

pub const ENV_AUTH_BASE_URL: &str = "AUTH_BASE_URL";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_CLIENT_ID: &str = "AUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "AUTH_CLIENT_SECRET";
pub const ENV_REFRESH_TOKEN: &str = "AUTH_REFRESH_TOKEN";

/// Effective configuration: the config file (if any) with environment
/// overrides applied on top.
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    file: ConfigFile,
    file_exists: bool,
    auth_base_url: String,
    api_base_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    refresh_token: Option<String>,
    timeout_seconds: u64,
}

impl Settings {
    /// Loads `path`, or `~/.site24x7.toml` when no path is given. A missing
    /// file is not an error; `config` creates it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = resolve_path(path)?;

        let (file, file_exists) = if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            (ConfigFile::from_file(&path)?, true)
        } else {
            tracing::debug!("No config file at {}", path.display());
            (ConfigFile::default(), false)
        };

        Ok(Self::from_parts(path, file, file_exists, |key| {
            std::env::var(key).ok()
        }))
    }

    /// Loads settings for `config`. An existing file that does not parse or
    /// validate is replaced by defaults so that it can be rewritten.
    pub fn load_for_rewrite(path: Option<&Path>) -> Result<Self> {
        let path = resolve_path(path)?;
        Ok(Self::for_rewrite(path, |key| std::env::var(key).ok()))
    }

    pub fn for_rewrite<F>(path: PathBuf, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if !path.exists() {
            return Self::from_parts(path, ConfigFile::default(), false, env);
        }

        let file = match ConfigFile::from_file(&path).and_then(|f| f.validate().map(|()| f)) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    "Config file {} is invalid and will be replaced: {}",
                    path.display(),
                    e
                );
                ConfigFile::default()
            }
        };
        Self::from_parts(path, file, true, env)
    }

    pub fn from_parts<F>(path: PathBuf, file: ConfigFile, file_exists: bool, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let non_empty = |v: &Option<String>| v.clone().filter(|v| !v.trim().is_empty());

        Self {
            auth_base_url: env(ENV_AUTH_BASE_URL).unwrap_or_else(|| file.auth_base_url()),
            api_base_url: env(ENV_API_BASE_URL).unwrap_or_else(|| file.api_base_url()),
            client_id: env(ENV_CLIENT_ID).or_else(|| non_empty(&file.auth.client_id)),
            client_secret: env(ENV_CLIENT_SECRET).or_else(|| non_empty(&file.auth.client_secret)),
            refresh_token: env(ENV_REFRESH_TOKEN).or_else(|| non_empty(&file.auth.refresh_token)),
            timeout_seconds: file.timeout_seconds(),
            path,
            file,
            file_exists,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &ConfigFile {
        &self.file
    }

    pub fn file_exists(&self) -> bool {
        self.file_exists
    }

    pub fn token_cache_path(&self) -> PathBuf {
        token_cache_path(&self.path)
    }
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => ConfigFile::default_path(),
    }
}

impl ConfigProvider for Settings {
    fn auth_base_url(&self) -> &str {
        self.auth_base_url.trim_end_matches('/')
    }

    fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("auth.base_url", &self.auth_base_url)?;
        validate_url("api.base_url", &self.api_base_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)
    }
}
