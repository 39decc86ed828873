//! CLI response types returned as JSON by `cfp` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `cfp auth login`, `cfp auth status`, `cfp issue submit`, and
//! `cfp issue stats`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{Issue, User};
use crate::enums::IssueStatus;

/// Response from `cfp auth login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginOutcome {
    pub authenticated: bool,
    pub user: User,
    /// The dashboard path the browser client would land on for this role.
    pub landing: String,
}

/// Response from `cfp auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatus {
    pub authenticated: bool,
    /// Where the token came from: `keyring`, `env`, or `file`.
    pub token_source: Option<String>,
    pub token_expires_at: Option<String>,
    pub device_id: String,
}

/// Response from `cfp issue submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ticket_id: String,
    pub anonymous: bool,
    /// Reminder shown to anonymous submitters to keep the ticket ID.
    pub note: Option<String>,
}

/// Response from `cfp issue stats`: client-side dashboard aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IssueStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl IssueStats {
    /// Compute dashboard statistics from a full listing.
    #[must_use]
    pub fn compute(issues: &[Issue]) -> Self {
        let mut by_status: BTreeMap<String, usize> = IssueStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), 0))
            .collect();
        let mut by_category = BTreeMap::new();

        for issue in issues {
            *by_status.entry(issue.status.as_str().to_string()).or_insert(0) += 1;
            *by_category
                .entry(issue.category.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total: issues.len(),
            by_status,
            by_category,
        }
    }
}

/// One polling cycle's delta from `cfp issue watch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WatchDelta {
    pub at: String,
    pub total: usize,
    pub new_issues: Vec<String>,
    pub status_changes: Vec<StatusChange>,
}

/// A status transition observed between two polls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChange {
    pub ticket_id: String,
    pub from: IssueStatus,
    pub to: IssueStatus,
}
