//! Session token inspection and the expiry-on-load policy.
//!
//! The portal's tokens are JWTs. The client never verifies signatures (the
//! backend does that); it only decodes the `exp` claim so an already-expired
//! token can be discarded before a request is made — the same pre-request
//! check the browser client ran.

use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::token_store;

/// A stored session token with its decoded expiry, if any.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub raw: String,
    /// `None` when the token carries no `exp` claim or is not JWT-shaped.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// Decode the JWT `exp` claim without signature verification.
///
/// # Errors
///
/// Returns `AuthError::Other` if the token is not a three-part JWT, the
/// payload is not base64url JSON, or the `exp` claim is missing/invalid.
pub fn decode_expiry(token: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Load the stored token, discarding it if already expired.
///
/// Returns `None` when nothing is stored, or when the stored token's `exp`
/// is in the past (in which case the stale credential is deleted — expired
/// tokens are cleared on read, not left to fail server-side).
#[must_use]
pub fn load_valid() -> Option<SessionToken> {
    let raw = token_store::load()?;
    let expires_at = decode_expiry(&raw).ok();
    let token = SessionToken { raw, expires_at };

    if token.is_expired() {
        tracing::warn!("stored token is expired — clearing credentials");
        if let Err(error) = token_store::delete() {
            tracing::warn!(%error, "failed to clear expired credentials");
        }
        return None;
    }

    Some(token)
}

/// Clear stored credentials (logout, or forced teardown after a 401/440).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn teardown() -> Result<(), AuthError> {
    token_store::delete()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_jwt_with_exp(exp: i64) -> String {
        let b64 = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
        format!(
            "{}.{}.{}",
            b64(r#"{"alg":"HS256"}"#),
            b64(&format!(r#"{{"sub":"user_1","exp":{exp}}}"#)),
            b64("fake_sig")
        )
    }

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt_with_exp(future_exp);
        let dt = decode_expiry(&jwt).expect("should decode");
        assert_eq!(dt.timestamp(), future_exp);
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let err = decode_expiry("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let b64 = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
        let jwt = format!(
            "{}.{}.{}",
            b64(r#"{"alg":"HS256"}"#),
            b64(r#"{"sub":"user_1"}"#),
            b64("fake_sig")
        );
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn expired_token_is_flagged() {
        let token = SessionToken {
            raw: make_jwt_with_exp(Utc::now().timestamp() - 10),
            expires_at: Some(Utc::now() - chrono::TimeDelta::seconds(10)),
        };
        assert!(token.is_expired());
    }

    #[test]
    fn token_without_exp_never_expires() {
        let token = SessionToken {
            raw: "opaque-token".into(),
            expires_at: None,
        };
        assert!(!token.is_expired());
    }
}
