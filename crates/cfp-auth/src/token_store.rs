//! Session token persistence.
//!
//! The browser client kept the bearer token in `localStorage`; the CLI uses
//! the OS keychain with a file fallback under `~/.cfp/`.

use std::fs;
use std::path::Path;

use crate::error::AuthError;
use crate::paths::{ensure_portal_home, portal_home};

const DEFAULT_KEYRING_SERVICE: &str = "cfp-cli";
const KEYRING_USER: &str = "portal-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Returns the keyring service name.
///
/// Defaults to `"cfp-cli"`. Override via `CFP_KEYRING_SERVICE` env var for
/// testing (e.g., `"cfp-cli-test"`) to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("CFP_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a session token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(token)
        }
    }
}

/// Load a session token. Priority: keyring → `CFP_AUTH__TOKEN` env → file (`~/.cfp/credentials`).
#[must_use]
pub fn load() -> Option<String> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some(token);
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var("CFP_AUTH__TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    // 3. File fallback
    load_file()
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring (ignore errors — may not exist)
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    // Delete credentials file
    delete_file_at(&portal_home()?)
}

/// Detect which tier the current token came from (for `cfp auth status`).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry.get_password().is_ok_and(|t| !t.is_empty())
    {
        return Some("keyring".into());
    }
    if std::env::var("CFP_AUTH__TOKEN").is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

// --- Private file helpers, rooted at the state directory ---

fn store_file(token: &str) -> Result<(), AuthError> {
    let dir = ensure_portal_home()?;
    store_file_at(&dir, token)
}

fn store_file_at(dir: &Path, token: &str) -> Result<(), AuthError> {
    let path = dir.join(CREDENTIALS_FILE_NAME);
    fs::write(&path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<String> {
    load_file_at(&portal_home().ok()?)
}

fn load_file_at(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join(CREDENTIALS_FILE_NAME))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file_at(dir: &Path) -> Result<(), AuthError> {
    let path = dir.join(CREDENTIALS_FILE_NAME);
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        store_file_at(tmp.path(), "session_token_abc123").expect("store");
        assert_eq!(
            load_file_at(tmp.path()).as_deref(),
            Some("session_token_abc123")
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join(CREDENTIALS_FILE_NAME))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file_at(tmp.path()).expect("delete");
        assert!(load_file_at(tmp.path()).is_none());
        assert!(!tmp.path().join(CREDENTIALS_FILE_NAME).exists());
    }

    #[test]
    fn delete_is_a_no_op_when_nothing_is_stored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        delete_file_at(tmp.path()).expect("first delete");
        delete_file_at(tmp.path()).expect("second delete");
    }

    #[test]
    fn loaded_tokens_are_trimmed() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        fs::write(tmp.path().join(CREDENTIALS_FILE_NAME), "  tok-123\n").expect("write");
        assert_eq!(load_file_at(tmp.path()).as_deref(), Some("tok-123"));
    }

    #[test]
    fn whitespace_only_credentials_load_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        fs::write(tmp.path().join(CREDENTIALS_FILE_NAME), "   \n  ").expect("write");
        assert!(load_file_at(tmp.path()).is_none());
    }
}
