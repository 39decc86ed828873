use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401: the backend rejected our credentials. Stored credentials
    /// have been cleared.
    #[error("unauthorized — credentials cleared, run `cfp auth login`")]
    Unauthorized,

    /// HTTP 440: the backend expired our session. Stored credentials have
    /// been cleared.
    #[error("session expired — credentials cleared, run `cfp auth login`")]
    SessionExpired,

    /// Any other non-success status, with the backend's `error` string when
    /// it sent one.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Network-level failure (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the documented contract.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error(transparent)]
    Auth(#[from] cfp_auth::AuthError),
}
