use std::path::PathBuf;

use trellis_api::{ApiClient, FileCredentialStore, ReqwestTransport, Session};
use trellis_core::{AppConfig, TrellisError, TrellisResult};

pub struct CliContext {
    pub api: ApiClient<ReqwestTransport>,
}

impl CliContext {
    /// Resolve configuration and restore any stored session.
    ///
    /// The server URL comes from the flag or `TRELLIS_SERVER`, then the
    /// config file, then the built-in default. The credentials path comes
    /// from the flag or `TRELLIS_CREDENTIALS`, then the platform config
    /// directory.
    pub async fn connect(
        server: Option<String>,
        credentials: Option<PathBuf>,
    ) -> TrellisResult<Self> {
        let config = AppConfig::load();
        let base_url = server.unwrap_or_else(|| config.effective_api_base_url().to_string());

        let credentials_path = match credentials {
            Some(path) => path,
            None => AppConfig::default_credentials_path().ok_or_else(|| {
                TrellisError::Internal("could not determine a credentials path".to_string())
            })?,
        };

        tracing::debug!(
            base_url = %base_url,
            credentials = %credentials_path.display(),
            "Connecting"
        );

        let store = FileCredentialStore::new(credentials_path);
        let session = Session::restore(store).await?;
        Ok(Self {
            api: ApiClient::new(base_url, session),
        })
    }
}
