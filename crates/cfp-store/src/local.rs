//! Offline issue store.
//!
//! Earlier client revisions had no backend at all: issues lived in a single
//! local-storage array, serialized as JSON. That mode survives here behind
//! `--offline` — CRUD over one array in `~/.cfp/issues.json`, with the same
//! generated ticket IDs and timestamp bumps the mock backend performed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use cfp_core::entities::{Issue, IssueResponse};
use cfp_core::enums::{IssueStatus, SubmissionType};
use cfp_core::validate::SubmissionForm;

use crate::error::StoreError;
use crate::ticket_id;

const ISSUES_FILE_NAME: &str = "issues.json";

/// File-backed issue collection for offline use.
#[derive(Debug, Clone)]
pub struct LocalIssueStore {
    path: PathBuf,
}

impl LocalIssueStore {
    /// Open a store at an explicit path (tests use a temp dir).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at its default location under `~/.cfp/`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Auth` if the state directory cannot be resolved.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = cfp_auth::paths::ensure_portal_home()?;
        Ok(Self::open(dir.join(ISSUES_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new issue from a validated submission form.
    ///
    /// Assigns a UUID issue id and a generated ticket ID, stamps both
    /// timestamps with now, and starts with no responses.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be persisted.
    pub fn add(&self, form: &SubmissionForm) -> Result<Issue, StoreError> {
        let mut issues = self.load()?;
        let now = Utc::now();

        let issue = Issue {
            issue_id: uuid::Uuid::new_v4().to_string(),
            ticket_id: ticket_id::generate()?,
            title: form.title.clone(),
            description: form.description.clone(),
            // Callers validate first; an absent category degrades to Other.
            category: form.category.unwrap_or(cfp_core::enums::Category::Other),
            status: IssueStatus::Pending,
            submitted_at: now,
            updated_at: now,
            submission_type: if form.anonymous {
                SubmissionType::Anonymous
            } else {
                SubmissionType::Named
            },
            user_id: None,
            name: if form.anonymous { None } else { form.name.clone() },
            email: if form.anonymous { None } else { form.email.clone() },
            contact_number: if form.anonymous { None } else { form.phone.clone() },
            admission_number: if form.anonymous {
                None
            } else {
                form.admission_number.clone()
            },
            responses: Vec::new(),
        };

        issues.push(issue.clone());
        self.save(&issues)?;
        Ok(issue)
    }

    /// Look up an issue by its ticket ID (anonymous tracking).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TicketNotFound` on a miss.
    pub fn get_by_ticket_id(&self, ticket_id: &str) -> Result<Issue, StoreError> {
        self.load()?
            .into_iter()
            .find(|issue| issue.ticket_id.eq_ignore_ascii_case(ticket_id))
            .ok_or_else(|| StoreError::TicketNotFound(ticket_id.into()))
    }

    /// Look up an issue by its internal id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IssueNotFound` on a miss.
    pub fn get_by_id(&self, issue_id: &str) -> Result<Issue, StoreError> {
        self.load()?
            .into_iter()
            .find(|issue| issue.issue_id == issue_id)
            .ok_or_else(|| StoreError::IssueNotFound(issue_id.into()))
    }

    /// All stored issues, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` for IO failures other than not-found.
    pub fn list(&self) -> Result<Vec<Issue>, StoreError> {
        self.load()
    }

    /// Update an issue's status, bumping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IssueNotFound` on a miss.
    pub fn update_status(&self, issue_id: &str, status: IssueStatus) -> Result<Issue, StoreError> {
        self.mutate(issue_id, |issue| {
            issue.status = status;
        })
    }

    /// Attach a response to an issue, bumping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IssueNotFound` on a miss.
    pub fn add_response(
        &self,
        issue_id: &str,
        message: &str,
        responder_id: Option<&str>,
    ) -> Result<Issue, StoreError> {
        let response = IssueResponse {
            response_id: uuid::Uuid::new_v4().to_string(),
            issue_id: issue_id.into(),
            responder_id: responder_id.map(Into::into),
            message: message.into(),
            responded_at: Utc::now(),
        };
        self.mutate(issue_id, move |issue| {
            issue.responses.push(response.clone());
        })
    }

    fn mutate(
        &self,
        issue_id: &str,
        apply: impl Fn(&mut Issue),
    ) -> Result<Issue, StoreError> {
        let mut issues = self.load()?;
        let issue = issues
            .iter_mut()
            .find(|issue| issue.issue_id == issue_id)
            .ok_or_else(|| StoreError::IssueNotFound(issue_id.into()))?;

        apply(issue);
        issue.updated_at = Utc::now();
        let updated = issue.clone();

        self.save(&issues)?;
        Ok(updated)
    }

    fn load(&self) -> Result<Vec<Issue>, StoreError> {
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
            Ok(issues) => Ok(issues),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "corrupt offline issue store; starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, issues: &[Issue]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(issues)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
