//! Cross-cutting error types for the portal CLI.
//!
//! Domain-specific errors (`AuthError`, `ApiError`, `StoreError`) live in
//! their respective crates; everything converges on `anyhow` in `cfp-cli`.

use thiserror::Error;

/// Errors that can be raised by any portal crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required fields, email shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
