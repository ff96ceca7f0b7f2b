use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use trellis_core::{TrellisError, TrellisResult};

/// An access token plus the refresh token that can replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Where token pairs survive between runs.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> TrellisResult<Option<TokenPair>>;
    async fn store(&self, tokens: &TokenPair) -> TrellisResult<()>;
    async fn clear(&self) -> TrellisResult<()>;
}

/// Credential store backed by a JSON file.
///
/// Writes go to a temp file in the same directory followed by a rename, so
/// a crash mid-write never leaves a corrupt credentials file behind.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> TrellisResult<Option<TokenPair>> {
        match fs::read(&self.path).await {
            Ok(data) => {
                let tokens = serde_json::from_slice(&data)
                    .map_err(|err| TrellisError::Serialization(err.to_string()))?;
                Ok(Some(tokens))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn store(&self, tokens: &TokenPair) -> TrellisResult<()> {
        let data = serde_json::to_vec_pretty(tokens)
            .map_err(|err| TrellisError::Serialization(err.to_string()))?;

        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        // Temp file in the same directory keeps the rename on one filesystem
        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.path().to_path_buf();
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!("Stored credentials at {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> TrellisResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and single-run sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<Mutex<Option<TokenPair>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of whatever the store currently holds.
    pub async fn current(&self) -> Option<TokenPair> {
        self.inner.lock().await.clone()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> TrellisResult<Option<TokenPair>> {
        Ok(self.inner.lock().await.clone())
    }

    async fn store(&self, tokens: &TokenPair) -> TrellisResult<()> {
        *self.inner.lock().await = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> TrellisResult<()> {
        *self.inner.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pair(token: &str, refresh_token: &str) -> TokenPair {
        TokenPair {
            token: token.to_string(),
            refresh_token: refresh_token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        store.store(&pair("t1", "r1")).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, Some(pair("t1", "r1")));
    }

    #[tokio::test]
    async fn test_file_store_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/trellis/credentials.json"));

        store.store(&pair("t1", "r1")).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(pair("t1", "r1")));
    }

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_the_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = FileCredentialStore::new(path.clone());

        store.store(&pair("t1", "r1")).await.unwrap();
        store.clear().await.unwrap();
        assert!(!path.exists());

        // Clearing again must not error
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = FileCredentialStore::new(path);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, TrellisError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_file_format_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = FileCredentialStore::new(path.clone());

        store.store(&pair("t1", "r1")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"refreshToken\""));
        assert!(!contents.contains("\"refresh_token\""));
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let handle = store.clone();

        store.store(&pair("t1", "r1")).await.unwrap();
        assert_eq!(handle.current().await, Some(pair("t1", "r1")));

        handle.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
