use serde::Deserialize;
use serde_json::json;
use trellis_core::TrellisResult;
use trellis_domain::User;

use crate::client::{decode, ApiClient};
use crate::credentials::TokenPair;
use crate::transport::{ApiRequest, HttpTransport};

/// What the server hands back at login and registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

impl AuthSession {
    fn token_pair(&self) -> TokenPair {
        TokenPair {
            token: self.token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

impl<T: HttpTransport> ApiClient<T> {
    /// Sign in and adopt the returned tokens as the active session.
    pub async fn login(&self, username: &str, password: &str) -> TrellisResult<AuthSession> {
        let request = ApiRequest::post(self.url("/auth/login"))
            .with_body(json!({ "username": username, "password": password }));
        let response = self.send(request).await?;
        let auth: AuthSession = decode(&response)?;
        self.session().issue(auth.token_pair()).await?;
        Ok(auth)
    }

    /// Create an account and adopt the returned tokens.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> TrellisResult<AuthSession> {
        let request = ApiRequest::post(self.url("/auth/register")).with_body(json!({
            "username": username,
            "email": email,
            "password": password,
        }));
        let response = self.send(request).await?;
        let auth: AuthSession = decode(&response)?;
        self.session().issue(auth.token_pair()).await?;
        Ok(auth)
    }

    /// Ask the server to revoke the refresh token, then drop local
    /// credentials. The local sign-out happens even when the server call
    /// fails.
    pub async fn logout(&self) -> TrellisResult<()> {
        if let Some(refresh_token) = self.session().refresh_token().await {
            let request = ApiRequest::post(self.url("/auth/logout"))
                .with_body(json!({ "refreshToken": refresh_token }));
            if let Err(err) = self.send(request).await {
                tracing::warn!("Server-side logout failed: {}", err);
            }
        }
        self.session().clear().await
    }

    /// Ask for a password reset email.
    pub async fn request_password_reset(&self, email: &str) -> TrellisResult<()> {
        let request = ApiRequest::post(self.url("/auth/request-password-reset"))
            .with_body(json!({ "email": email }));
        self.send(request).await?;
        Ok(())
    }

    /// Set a new password using an emailed reset token.
    pub async fn reset_password(&self, reset_token: &str, password: &str) -> TrellisResult<()> {
        let request = ApiRequest::post(self.url("/auth/reset-password"))
            .with_body(json!({ "token": reset_token, "password": password }));
        self.send(request).await?;
        Ok(())
    }

    /// Confirm an email address using an emailed verification token.
    pub async fn verify_email(&self, verification_token: &str) -> TrellisResult<()> {
        let request = ApiRequest::post(self.url("/auth/verify-email"))
            .with_body(json!({ "token": verification_token }));
        self.send(request).await?;
        Ok(())
    }
}
