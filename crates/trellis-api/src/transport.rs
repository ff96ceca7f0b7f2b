use async_trait::async_trait;
use serde_json::Value;
use trellis_core::{TrellisError, TrellisResult};

/// One HTTP call, described independently of any HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: reqwest::Method, url: String) -> Self {
        Self {
            method,
            url,
            token: None,
            body: None,
        }
    }

    pub fn get(url: String) -> Self {
        Self::new(reqwest::Method::GET, url)
    }

    pub fn post(url: String) -> Self {
        Self::new(reqwest::Method::POST, url)
    }

    pub fn patch(url: String) -> Self {
        Self::new(reqwest::Method::PATCH, url)
    }

    pub fn delete(url: String) -> Self {
        Self::new(reqwest::Method::DELETE, url)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw HTTP response: status code plus undecoded body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network seam.
///
/// `Err` is reserved for transport failures (DNS, connect, TLS, timeout);
/// any response the server actually produced comes back as `Ok`, whatever
/// its status code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> TrellisResult<ApiResponse>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> TrellisResult<ApiResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        if let Some(token) = &request.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TrellisError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| TrellisError::Transport(err.to_string()))?
            .to_vec();

        tracing::trace!(url = %request.url, status, "HTTP exchange complete");
        Ok(ApiResponse { status, body })
    }
}
