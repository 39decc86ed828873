use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::IssueResponse;
use crate::enums::{Category, IssueStatus, SubmissionType};

/// A submitted issue or suggestion, as returned by the portal API.
///
/// Requester identity fields are only present for named submissions; the
/// backend sends explicit nulls for anonymous ones.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    pub issue_id: String,
    /// Human-readable identifier handed to the submitter for tracking.
    pub ticket_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: IssueStatus,
    #[serde(with = "crate::time::flexible")]
    #[schemars(with = "String")]
    pub submitted_at: DateTime<Utc>,
    #[serde(with = "crate::time::flexible")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
    pub submission_type: SubmissionType,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub admission_number: Option<String>,
    /// Admin responses, oldest first. List endpoints may omit this.
    #[serde(default)]
    pub responses: Vec<IssueResponse>,
}

impl Issue {
    /// Case-insensitive substring match over title, description, and ticket ID.
    ///
    /// This is the admin dashboard's search-box behavior.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.ticket_id.to_lowercase().contains(&query)
    }
}
