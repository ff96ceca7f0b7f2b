use tokio::sync::RwLock;
use trellis_core::TrellisResult;

use crate::credentials::{CredentialStore, TokenPair};

/// The client's view of who is signed in.
///
/// The current token pair lives behind a lock, and every change is mirrored
/// to the credential store so a session survives process restarts. Token
/// state only moves through [`issue`](Session::issue),
/// [`refresh`](Session::refresh), and [`clear`](Session::clear).
pub struct Session {
    store: Box<dyn CredentialStore>,
    tokens: RwLock<Option<TokenPair>>,
}

impl Session {
    /// A session with no credentials loaded.
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            tokens: RwLock::new(None),
        }
    }

    /// A session warmed from whatever the store currently holds.
    pub async fn restore(store: impl CredentialStore + 'static) -> TrellisResult<Self> {
        let tokens = store.load().await?;
        Ok(Self {
            store: Box::new(store),
            tokens: RwLock::new(tokens),
        })
    }

    /// Adopt a fresh pair after login or registration.
    pub async fn issue(&self, tokens: TokenPair) -> TrellisResult<()> {
        self.store.store(&tokens).await?;
        *self.tokens.write().await = Some(tokens);
        tracing::debug!("Session issued");
        Ok(())
    }

    /// Replace the pair after a successful token refresh.
    pub async fn refresh(&self, tokens: TokenPair) -> TrellisResult<()> {
        self.store.store(&tokens).await?;
        *self.tokens.write().await = Some(tokens);
        tracing::debug!("Session refreshed");
        Ok(())
    }

    /// Drop all credentials, in memory first and then from the store.
    pub async fn clear(&self) -> TrellisResult<()> {
        *self.tokens.write().await = None;
        self.store.clear().await
    }

    pub async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.as_ref().map(|pair| pair.token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .await
            .as_ref()
            .map(|pair| pair.refresh_token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;

    fn pair(token: &str, refresh_token: &str) -> TokenPair {
        TokenPair {
            token: token.to_string(),
            refresh_token: refresh_token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_session_is_unauthenticated() {
        let session = Session::new(MemoryCredentialStore::new());
        assert!(!session.is_authenticated().await);
        assert_eq!(session.access_token().await, None);
    }

    #[tokio::test]
    async fn test_restore_warms_from_the_store() {
        let store = MemoryCredentialStore::new();
        store.store(&pair("t1", "r1")).await.unwrap();

        let session = Session::restore(store).await.unwrap();

        assert!(session.is_authenticated().await);
        assert_eq!(session.access_token().await.as_deref(), Some("t1"));
        assert_eq!(session.refresh_token().await.as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn test_issue_mirrors_to_the_store() {
        let store = MemoryCredentialStore::new();
        let handle = store.clone();
        let session = Session::new(store);

        session.issue(pair("t1", "r1")).await.unwrap();

        assert_eq!(handle.current().await, Some(pair("t1", "r1")));
        assert_eq!(session.access_token().await.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_refresh_replaces_the_pair() {
        let store = MemoryCredentialStore::new();
        let handle = store.clone();
        let session = Session::restore(store).await.unwrap();

        session.issue(pair("t1", "r1")).await.unwrap();
        session.refresh(pair("t2", "r2")).await.unwrap();

        assert_eq!(session.access_token().await.as_deref(), Some("t2"));
        assert_eq!(handle.current().await, Some(pair("t2", "r2")));
    }

    #[tokio::test]
    async fn test_clear_empties_memory_and_store() {
        let store = MemoryCredentialStore::new();
        let handle = store.clone();
        let session = Session::new(store);

        session.issue(pair("t1", "r1")).await.unwrap();
        session.clear().await.unwrap();

        assert!(!session.is_authenticated().await);
        assert_eq!(handle.current().await, None);
    }
}
