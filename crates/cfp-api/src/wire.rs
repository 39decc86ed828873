//! Request/response payloads for the portal's HTTP contract.
//!
//! The backend is loose about envelopes — list endpoints have been observed
//! returning both `{"issues": [...]}` and a bare array, detail endpoints both
//! `{"issue": {...}}` and the bare record. The untagged enums below accept
//! either and normalize for callers.

use serde::{Deserialize, Serialize};

use cfp_core::entities::{Issue, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub device_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// Body for `POST /api/submit_issue`. Identity fields are explicit nulls for
/// anonymous submissions, matching what the browser form sent.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitIssueRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub name: Option<&'a str>,
    pub user_id: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub admission: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitIssueResponse {
    pub ticket_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackIssueRequest<'a> {
    pub ticket_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest<'a> {
    pub issue_id: &'a str,
    pub status: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponseRequest<'a> {
    pub issue_id: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateAiRequest<'a> {
    pub issue_description: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiDraftResponse {
    pub response: String,
}

/// `GET /api/get_all_issues`, enveloped or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IssueListing {
    Enveloped { issues: Vec<Issue> },
    Bare(Vec<Issue>),
}

impl IssueListing {
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        match self {
            Self::Enveloped { issues } | Self::Bare(issues) => issues,
        }
    }
}

/// A single-issue payload, enveloped or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IssuePayload {
    Enveloped { issue: Issue },
    Bare(Box<Issue>),
}

impl IssuePayload {
    #[must_use]
    pub fn into_issue(self) -> Issue {
        match self {
            Self::Enveloped { issue } => issue,
            Self::Bare(issue) => *issue,
        }
    }
}

/// Error body the backend sends with non-2xx statuses: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn issue_json() -> serde_json::Value {
        serde_json::json!({
            "issue_id": "iss-1",
            "ticket_id": "ABC12345",
            "title": "t",
            "description": "d",
            "category": "Library",
            "status": "pending",
            "submitted_at": "2024-02-01T08:00:00Z",
            "updated_at": "2024-02-01T08:00:00Z",
            "submission_type": "anonymous"
        })
    }

    #[test]
    fn listing_accepts_enveloped_and_bare() {
        let enveloped: IssueListing =
            serde_json::from_value(serde_json::json!({"issues": [issue_json()]})).unwrap();
        let bare: IssueListing = serde_json::from_value(serde_json::json!([issue_json()])).unwrap();
        assert_eq!(enveloped.into_issues().len(), 1);
        assert_eq!(bare.into_issues().len(), 1);
    }

    #[test]
    fn payload_accepts_enveloped_and_bare() {
        let enveloped: IssuePayload =
            serde_json::from_value(serde_json::json!({"issue": issue_json()})).unwrap();
        let bare: IssuePayload = serde_json::from_value(issue_json()).unwrap();
        assert_eq!(enveloped.into_issue().issue_id, "iss-1");
        assert_eq!(bare.into_issue().issue_id, "iss-1");
    }

    #[test]
    fn anonymous_submit_serializes_explicit_nulls() {
        let req = SubmitIssueRequest {
            title: "t",
            description: "d",
            category: "Library",
            name: None,
            user_id: None,
            email: None,
            phone: None,
            admission: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["name"], serde_json::Value::Null);
        assert_eq!(value["admission"], serde_json::Value::Null);
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }
}
