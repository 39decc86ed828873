//! Filesystem locations for per-browser-equivalent client state.
//!
//! Everything the web client kept in `localStorage` (token, device id,
//! recent tickets, the offline issue store) lives under one directory:
//! `~/.cfp` by default, relocatable via `CFP_HOME` for tests and CI.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Resolve the client state directory (`CFP_HOME` env or `~/.cfp`).
///
/// # Errors
///
/// Returns `AuthError::Other` when no home directory can be resolved.
pub fn portal_home() -> Result<PathBuf, AuthError> {
    if let Ok(home) = std::env::var("CFP_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    dirs::home_dir()
        .map(|h| h.join(".cfp"))
        .ok_or_else(|| AuthError::Other("home directory not found".into()))
}

/// Create the state directory if missing (0700 on Unix).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the directory cannot be created.
pub fn ensure_portal_home() -> Result<PathBuf, AuthError> {
    let dir = portal_home()?;
    ensure_state_dir(&dir)?;
    Ok(dir)
}

/// Create an explicit state directory if missing (0700 on Unix).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the directory cannot be created.
pub fn ensure_state_dir(dir: &Path) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}
