//! Status, category, role, and submission-type enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! as the canonical wire form. The live backend is inconsistent about casing
//! ("Pending", "in Review", "Resolved", "closed"), so deserialization carries
//! aliases for every spelling observed in production responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// IssueStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a submitted issue.
///
/// The backend accepts arbitrary status updates, so no transition rules are
/// enforced client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "In Review", alias = "in Review", alias = "in review")]
    InReview,
    #[serde(alias = "Resolved")]
    Resolved,
    #[serde(alias = "Closed")]
    Closed,
}

impl IssueStatus {
    /// Canonical wire string (matches the serde form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in_review",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Human-readable label for table output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// All statuses, in lifecycle order. Used for stats buckets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pending, Self::InReview, Self::Resolved, Self::Closed]
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_review" | "review" => Ok(Self::InReview),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(CoreError::Validation(format!(
                "unknown status '{s}' (expected one of: pending, in_review, resolved, closed)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Submission category. The backend stores the title-case labels, so serde
/// renames match them exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Academics,
    Hostel,
    Transport,
    Examination,
    Facilities,
    Cafeteria,
    Library,
    Sports,
    #[serde(rename = "Health Services")]
    HealthServices,
    #[serde(rename = "IT Services")]
    ItServices,
    #[serde(rename = "Administrative Services")]
    AdministrativeServices,
    #[serde(rename = "Clubs and Societies")]
    ClubsAndSocieties,
    Security,
    Other,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Academics => "Academics",
            Self::Hostel => "Hostel",
            Self::Transport => "Transport",
            Self::Examination => "Examination",
            Self::Facilities => "Facilities",
            Self::Cafeteria => "Cafeteria",
            Self::Library => "Library",
            Self::Sports => "Sports",
            Self::HealthServices => "Health Services",
            Self::ItServices => "IT Services",
            Self::AdministrativeServices => "Administrative Services",
            Self::ClubsAndSocieties => "Clubs and Societies",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Academics,
            Self::Hostel,
            Self::Transport,
            Self::Examination,
            Self::Facilities,
            Self::Cafeteria,
            Self::Library,
            Self::Sports,
            Self::HealthServices,
            Self::ItServices,
            Self::AdministrativeServices,
            Self::ClubsAndSocieties,
            Self::Security,
            Self::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown category '{s}' (expected one of: {})",
                    Self::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role from the backend profile. The database spells the non-admin
/// role `user` while the frontend calls it `student`; both map to `Student`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[serde(alias = "user")]
    Student,
    /// Anything the backend sends that we do not recognize.
    #[serde(other)]
    Unknown,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SubmissionType
// ---------------------------------------------------------------------------

/// Whether a submission carries the requester's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    #[serde(alias = "Anonymous")]
    Anonymous,
    #[serde(alias = "Named")]
    Named,
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Anonymous => "anonymous",
            Self::Named => "named",
        })
    }
}
