use crate::domain::model::CachedToken;
use crate::domain::ports::TokenStore;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::sync::Mutex;

/// Access token cache kept as a JSON file next to the config file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<CachedToken>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        let data = tokio::fs::read(&self.path).await?;
        Ok(Some(serde_json::from_slice(&data)?))
    }

    async fn save(&self, token: &CachedToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(token)?;
        tokio::fs::write(&self.path, data).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<CachedToken>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: CachedToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<CachedToken>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<CachedToken>> {
        Ok(self.slot().clone())
    }

    async fn save(&self, token: &CachedToken) -> Result<()> {
        *self.slot() = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn token() -> CachedToken {
        CachedToken::new("access".to_string(), 3600, "client", Utc::now())
    }

    #[tokio::test]
    async fn test_file_store_save_load_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("cache").join("token.json"));

        assert!(store.load().await.unwrap().is_none());

        let token = token();
        store.save(&token).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(token));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        // Clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_corrupt_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().await.is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::default();
        tokio_test::block_on(async {
            assert!(store.load().await.unwrap().is_none());
            store.save(&token()).await.unwrap();
            assert!(store.load().await.unwrap().is_some());
            store.clear().await.unwrap();
            assert!(store.load().await.unwrap().is_none());
        });
    }
}
