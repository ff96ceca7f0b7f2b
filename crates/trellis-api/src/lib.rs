//! REST client for Trellis kanban servers.
//!
//! The crate is organized around three seams:
//! - [`transport::HttpTransport`]: the network boundary, mockable in tests
//! - [`credentials::CredentialStore`]: where token pairs survive restarts
//! - [`client::ApiClient`]: typed endpoints behind a token-refresh gate

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod session;
pub mod transport;

pub use client::ApiClient;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TokenPair};
pub use endpoints::auth::AuthSession;
pub use session::Session;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
