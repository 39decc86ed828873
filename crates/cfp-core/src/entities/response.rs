use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An administrator's reply attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IssueResponse {
    pub response_id: String,
    pub issue_id: String,
    /// User ID of the responding administrator.
    pub responder_id: Option<String>,
    pub message: String,
    #[serde(with = "crate::time::flexible")]
    #[schemars(with = "String")]
    pub responded_at: DateTime<Utc>,
}
