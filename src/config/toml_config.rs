use crate::utils::error::{Result, Site24x7Error};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".site24x7.toml";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Zoho accounts and Site24x7 API hosts per data center.
/// https://www.site24x7.com/help/api/#data_centers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCenter {
    #[default]
    Us,
    Eu,
    Cn,
    In,
    Au,
    Jp,
}

impl DataCenter {
    pub fn auth_base_url(self) -> &'static str {
        match self {
            DataCenter::Us => "https://accounts.zoho.com",
            DataCenter::Eu => "https://accounts.zoho.eu",
            DataCenter::Cn => "https://accounts.zoho.com.cn",
            DataCenter::In => "https://accounts.zoho.in",
            DataCenter::Au => "https://accounts.zoho.com.au",
            DataCenter::Jp => "https://accounts.zoho.jp",
        }
    }

    pub fn api_base_url(self) -> &'static str {
        match self {
            DataCenter::Us => "https://www.site24x7.com/api",
            DataCenter::Eu => "https://www.site24x7.eu/api",
            DataCenter::Cn => "https://www.site24x7.cn/api",
            DataCenter::In => "https://www.site24x7.in/api",
            DataCenter::Au => "https://www.site24x7.net.au/api",
            DataCenter::Jp => "https://www.site24x7.jp/api",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_center: Option<DataCenter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl ConfigFile {
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_CONFIG_FILE))
            .ok_or_else(|| Site24x7Error::ConfigError {
                message: "Unable to determine the home directory; pass --config".to_string(),
            })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| Site24x7Error::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        // The file holds the client secret and refresh token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!("Wrote config file {}", path.display());
        Ok(())
    }

    pub fn data_center(&self) -> DataCenter {
        self.auth.data_center.unwrap_or_default()
    }

    pub fn auth_base_url(&self) -> String {
        self.auth
            .base_url
            .clone()
            .unwrap_or_else(|| self.data_center().auth_base_url().to_string())
    }

    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| self.data_center().api_base_url().to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for ConfigFile {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.auth.base_url {
            validate_url("auth.base_url", url)?;
        }
        if let Some(url) = &self.api.base_url {
            validate_url("api.base_url", url)?;
        }
        validate_range("api.timeout_seconds", self.timeout_seconds(), 1, 300)
    }
}

/// The access token cache sits next to the config file.
pub fn token_cache_path(config_path: &Path) -> PathBuf {
    let mut name = config_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    name.push(".token.json");
    config_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::from_toml_str(
            r#"
[auth]
client_id = "1000.ABC"
client_secret = "s3cret"
refresh_token = "1000.refresh"
data_center = "eu"

[api]
timeout_seconds = 10
"#,
        )
        .unwrap();

        assert_eq!(config.auth.client_id.as_deref(), Some("1000.ABC"));
        assert_eq!(config.data_center(), DataCenter::Eu);
        assert_eq!(config.auth_base_url(), "https://accounts.zoho.eu");
        assert_eq!(config.api_base_url(), "https://www.site24x7.eu/api");
        assert_eq!(config.timeout_seconds(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let config = ConfigFile::from_toml_str("").unwrap();
        assert_eq!(config.auth_base_url(), "https://accounts.zoho.com");
        assert_eq!(config.api_base_url(), "https://www.site24x7.com/api");
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_explicit_base_url_beats_data_center() {
        let config = ConfigFile::from_toml_str(
            r#"
[auth]
data_center = "jp"
base_url = "http://localhost:9000"
"#,
        )
        .unwrap();
        assert_eq!(config.auth_base_url(), "http://localhost:9000");
        assert_eq!(config.api_base_url(), "https://www.site24x7.jp/api");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SITE24X7_TEST_CLIENT_SECRET", "from-env");

        let config = ConfigFile::from_toml_str(
            r#"
[auth]
client_secret = "${SITE24X7_TEST_CLIENT_SECRET}"
client_id = "${SITE24X7_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(config.auth.client_secret.as_deref(), Some("from-env"));
        assert_eq!(
            config.auth.client_id.as_deref(),
            Some("${SITE24X7_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("SITE24X7_TEST_CLIENT_SECRET");
    }

    #[test]
    fn test_validation() {
        let bad_url = ConfigFile::from_toml_str("[api]\nbase_url = \"not-a-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout = ConfigFile::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());

        assert!(ConfigFile::from_toml_str("[auth]\ndata_center = \"mars\"\n").is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site24x7.toml");

        let mut config = ConfigFile::default();
        config.auth.client_id = Some("id".to_string());
        config.auth.refresh_token = Some("refresh".to_string());
        config.save_to_file(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("[auth]"));
        assert!(!saved.contains("client_secret"));

        assert_eq!(ConfigFile::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[auth]\nclient_id = \"file-id\"\n")
            .unwrap();

        let config = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(config.auth.client_id.as_deref(), Some("file-id"));
    }

    #[test]
    fn test_token_cache_path() {
        assert_eq!(
            token_cache_path(Path::new("/home/fred/.site24x7.toml")),
            PathBuf::from("/home/fred/.site24x7.toml.token.json")
        );
    }
}
