//! Per-client device identifier.
//!
//! The backend binds sessions to a client-generated device ID sent as
//! `X-Device-ID` on every request. The browser kept it in `localStorage`;
//! here it persists at `~/.cfp/device_id` and is stable across invocations.

use std::fs;
use std::path::Path;

use crate::error::AuthError;
use crate::paths::{ensure_state_dir, portal_home};

const DEVICE_ID_FILE_NAME: &str = "device_id";
const DEVICE_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DEVICE_ID_SUFFIX_LEN: usize = 16;

/// Load the persisted device ID, generating and storing one on first use.
///
/// Priority: `CFP_DEVICE_ID` env (tests/CI) → file → freshly generated.
///
/// # Errors
///
/// Returns `AuthError::DeviceIdError` if generation or persistence fails.
pub fn get_or_create() -> Result<String, AuthError> {
    if let Ok(id) = std::env::var("CFP_DEVICE_ID") {
        if !id.is_empty() {
            return Ok(id);
        }
    }
    get_or_create_at(&portal_home()?)
}

/// Same as [`get_or_create`], rooted at an explicit state directory and
/// skipping the env override.
///
/// # Errors
///
/// Returns `AuthError::DeviceIdError` if generation or persistence fails.
pub fn get_or_create_at(home: &Path) -> Result<String, AuthError> {
    if let Some(id) = load_file(home) {
        return Ok(id);
    }

    let id = generate()?;
    store_file(home, &id)?;
    tracing::debug!(device_id = %id, "generated new device id");
    Ok(id)
}

/// Generate a fresh `DEV-`-prefixed identifier (16 uppercase alphanumerics).
///
/// # Errors
///
/// Returns `AuthError::DeviceIdError` if the system RNG is unavailable.
pub fn generate() -> Result<String, AuthError> {
    let mut bytes = [0u8; DEVICE_ID_SUFFIX_LEN];
    getrandom::fill(&mut bytes)
        .map_err(|e| AuthError::DeviceIdError(format!("rng unavailable: {e}")))?;

    let suffix: String = bytes
        .iter()
        .map(|b| DEVICE_ID_CHARSET[usize::from(*b) % DEVICE_ID_CHARSET.len()] as char)
        .collect();
    Ok(format!("DEV-{suffix}"))
}

fn load_file(home: &Path) -> Option<String> {
    let path = home.join(DEVICE_ID_FILE_NAME);
    fs::read_to_string(&path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn store_file(home: &Path, id: &str) -> Result<(), AuthError> {
    ensure_state_dir(home)?;
    let path = home.join(DEVICE_ID_FILE_NAME);
    fs::write(&path, id)
        .map_err(|e| AuthError::DeviceIdError(format!("write {}: {e}", path.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::DeviceIdError(format!("chmod {}: {e}", path.display())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = generate().expect("rng");
        assert!(id.starts_with("DEV-"));
        assert_eq!(id.len(), 4 + DEVICE_ID_SUFFIX_LEN);
        assert!(
            id[4..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate().expect("rng");
        let b = generate().expect("rng");
        assert_ne!(a, b);
    }

    #[test]
    fn id_is_generated_once_persisted_and_reused_verbatim() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        let first = get_or_create_at(tmp.path()).expect("first call generates");
        let second = get_or_create_at(tmp.path()).expect("second call reloads");

        assert_eq!(first, second);
        assert!(first.starts_with("DEV-"));
        let on_disk =
            std::fs::read_to_string(tmp.path().join("device_id")).expect("id file exists");
        assert_eq!(on_disk, first);
    }

    #[test]
    fn stored_id_is_trimmed_on_load() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        std::fs::write(tmp.path().join("device_id"), "DEV-AB12CD34EF56GH78\n").expect("write");

        let id = get_or_create_at(tmp.path()).expect("load");
        assert_eq!(id, "DEV-AB12CD34EF56GH78");
    }

    #[test]
    fn whitespace_only_file_is_replaced_with_a_fresh_id() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        std::fs::write(tmp.path().join("device_id"), "  \n").expect("write");

        let id = get_or_create_at(tmp.path()).expect("regenerate");
        assert!(id.starts_with("DEV-"));
        let on_disk =
            std::fs::read_to_string(tmp.path().join("device_id")).expect("id file exists");
        assert_eq!(on_disk, id);
    }
}
