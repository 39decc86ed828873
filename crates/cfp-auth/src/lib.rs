//! # cfp-auth
//!
//! Client-side auth state for the feedback portal CLI.
//!
//! Provides the persisted device identifier (`X-Device-ID` session binding),
//! session token storage (OS keychain via `keyring` with a file fallback),
//! best-effort JWT expiry decoding, and session teardown. No signature
//! verification happens here — the backend owns token validity.

pub mod device_id;
pub mod error;
pub mod paths;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::SessionToken;

/// Resolve the best available session token, discarding an expired one.
#[must_use]
pub fn resolve_token() -> Option<SessionToken> {
    session::load_valid()
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    session::teardown()
}
