use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("ticket id generation failed: {0}")]
    TicketId(String),

    #[error("no issue found with ticket ID: {0}")]
    TicketNotFound(String),

    #[error("no issue found with id: {0}")]
    IssueNotFound(String),

    #[error(transparent)]
    Auth(#[from] cfp_auth::AuthError),
}
