use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use trellis_core::{TrellisError, TrellisResult};

use crate::credentials::TokenPair;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

/// REST client for a Trellis server.
///
/// Every authorized call flows through one gate: on a 401 the client
/// attempts exactly one token refresh and resends the original request
/// once. A rejected refresh clears the session so the caller sees a single
/// `SessionExpired` instead of an endless retry loop.
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_transport(ReqwestTransport::new(), base_url, session)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            session: Arc::new(session),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request that needs no authorization.
    pub(crate) async fn send(&self, request: ApiRequest) -> TrellisResult<ApiResponse> {
        let response = self.transport.execute(request).await?;
        error_for_status(response)
    }

    /// Send a request with the session's access token attached, refreshing
    /// the token and resending once if the server answers 401.
    pub(crate) async fn send_authorized(&self, request: ApiRequest) -> TrellisResult<ApiResponse> {
        let Some(token) = self.session.access_token().await else {
            return Err(TrellisError::SessionExpired);
        };

        let response = self
            .transport
            .execute(request.clone().with_token(token))
            .await?;
        if response.status != 401 {
            return error_for_status(response);
        }

        tracing::debug!(url = %request.url, "Access token rejected, refreshing");
        let token = self.refresh_access_token().await?;
        let response = self.transport.execute(request.with_token(token)).await?;
        error_for_status(response)
    }

    /// Exchange the refresh token for a new pair, returning the new access
    /// token. A definitive server rejection clears the session; a transport
    /// failure leaves the stored credentials alone so the caller can retry
    /// when the network is back.
    async fn refresh_access_token(&self) -> TrellisResult<String> {
        let Some(refresh_token) = self.session.refresh_token().await else {
            return Err(TrellisError::SessionExpired);
        };

        let request = ApiRequest::post(self.url("/auth/refresh"))
            .with_body(serde_json::json!({ "refreshToken": refresh_token }));
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Refresh token rejected, signing out");
            self.expire_session().await;
            return Err(TrellisError::SessionExpired);
        }

        let tokens: TokenPair = decode(&response)?;
        let access = tokens.token.clone();
        self.session.refresh(tokens).await?;
        Ok(access)
    }

    async fn expire_session(&self) {
        if let Err(err) = self.session.clear().await {
            tracing::warn!("Failed to clear rejected credentials: {}", err);
        }
    }
}

/// Map a non-2xx response to the error the caller should see.
pub(crate) fn error_for_status(response: ApiResponse) -> TrellisResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let message = server_message(&response);
    match response.status {
        401 => Err(TrellisError::Unauthorized),
        404 => Err(TrellisError::NotFound(message)),
        400..=499 => Err(TrellisError::Validation(message)),
        status => Err(TrellisError::Api { status, message }),
    }
}

/// Pull a human-readable message out of an error body.
fn server_message(response: &ApiResponse) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(body) = serde_json::from_slice::<ErrorBody>(&response.body) {
        return body.message;
    }
    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    if text.is_empty() {
        format!("server returned status {}", response.status)
    } else {
        text.to_string()
    }
}

pub(crate) fn decode<R: DeserializeOwned>(response: &ApiResponse) -> TrellisResult<R> {
    serde_json::from_slice(&response.body)
        .map_err(|err| TrellisError::Serialization(err.to_string()))
}

pub(crate) fn json_body<B: Serialize>(body: &B) -> TrellisResult<Value> {
    serde_json::to_value(body).map_err(|err| TrellisError::Serialization(err.to_string()))
}
