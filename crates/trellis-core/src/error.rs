use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Transport error: {0}")]
    Transport(String),

    /// A request was rejected with 401 after the refresh gate already ran.
    #[error("Unauthorized")]
    Unauthorized,

    /// The refresh credential was rejected; stored credentials are cleared
    /// and the caller must authenticate again.
    #[error("Session expired: please log in again")]
    SessionExpired,

    #[error("Not found: {0}")]
    NotFound(String),

    /// 4xx with a server-supplied message body, surfaced verbatim.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
