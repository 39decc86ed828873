//! Recent-ticket ledger.
//!
//! After a successful submission the client remembers the ticket locally so
//! the submitter can find it again without writing it down. Newest first,
//! capped at ten entries — the browser client kept the same list under the
//! `recentTickets` key.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const RECENT_TICKETS_FILE_NAME: &str = "recent_tickets.json";
const MAX_RECENT_TICKETS: usize = 10;

/// One remembered submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentTicket {
    pub ticket_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
}

/// File-backed ledger of the most recent submissions.
#[derive(Debug, Clone)]
pub struct RecentTicketStore {
    path: PathBuf,
}

impl RecentTicketStore {
    /// Open a ledger at an explicit path (tests use a temp dir).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the ledger at its default location under `~/.cfp/`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Auth` if the state directory cannot be resolved.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = cfp_auth::paths::ensure_portal_home()?;
        Ok(Self::open(dir.join(RECENT_TICKETS_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remember a ticket: prepend and truncate to the ten most recent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the ledger cannot be persisted.
    pub fn record(&self, ticket_id: &str, title: &str) -> Result<(), StoreError> {
        let mut tickets = self.list()?;
        tickets.insert(
            0,
            RecentTicket {
                ticket_id: ticket_id.into(),
                title: title.into(),
                date: Utc::now(),
            },
        );
        tickets.truncate(MAX_RECENT_TICKETS);
        self.save(&tickets)
    }

    /// All remembered tickets, newest first. A missing or corrupt file is
    /// an empty ledger, never an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` only for IO failures other than not-found.
    pub fn list(&self) -> Result<Vec<RecentTicket>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tickets) => Ok(tickets),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "corrupt recent-ticket ledger; starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Forget all remembered tickets.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, tickets: &[RecentTicket]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tickets)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
