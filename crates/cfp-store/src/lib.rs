//! # cfp-store
//!
//! JSON-file-backed local state, the CLI's stand-in for the browser's
//! `localStorage`:
//! - the recent-ticket ledger (last 10 submissions, newest first)
//! - the offline issue store retained from the client revisions that ran
//!   entirely against local storage, exposed via `--offline`
//! - the 8-character ticket-ID generator those revisions used

pub mod error;
pub mod local;
pub mod recent;
pub mod ticket_id;

pub use error::StoreError;
pub use local::LocalIssueStore;
pub use recent::{RecentTicket, RecentTicketStore};
