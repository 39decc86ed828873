//! Submission form validation.
//!
//! Mirrors the portal's submit form: title, description, and category are
//! always required; a named submission additionally requires the requester's
//! name, email, phone, and admission number. All failing fields are reported
//! in one pass so the caller can surface them together.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::errors::CoreError;

/// One failed form field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Draft of a new submission, before it is sent to the API or local store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    /// `false` = named submission: identity fields below become required.
    pub anonymous: bool,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admission_number: Option<String>,
}

impl SubmissionForm {
    /// Validate the form, returning every failing field.
    ///
    /// # Errors
    ///
    /// Returns the full list of `FieldError`s when any field fails.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "title is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "description is required"));
        }
        if self.category.is_none() {
            errors.push(FieldError::new("category", "category is required"));
        }

        if !self.anonymous {
            if is_blank(self.name.as_deref()) {
                errors.push(FieldError::new("name", "name is required"));
            }
            match self.email.as_deref() {
                None => errors.push(FieldError::new("email", "email is required")),
                Some(email) if email.trim().is_empty() => {
                    errors.push(FieldError::new("email", "email is required"));
                }
                Some(email) if !is_valid_email(email) => {
                    errors.push(FieldError::new("email", "invalid email format"));
                }
                Some(_) => {}
            }
            if is_blank(self.phone.as_deref()) {
                errors.push(FieldError::new("phone", "phone number is required"));
            }
            if is_blank(self.admission_number.as_deref()) {
                errors.push(FieldError::new(
                    "admission_number",
                    "admission number is required",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Same shape check the browser form used: `\S+@\S+\.\S+`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex compiles"));
    re.is_match(email.trim())
}

/// Validate login inputs: both fields present and the email well-formed.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first failing check.
pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "please enter both email and password".into(),
        ));
    }
    if !is_valid_email(email) {
        return Err(CoreError::Validation("invalid email format".into()));
    }
    Ok(())
}

/// Parse a category string from CLI input.
///
/// # Errors
///
/// Returns `CoreError::Validation` listing accepted categories on a miss.
pub fn parse_category(value: &str) -> Result<Category, CoreError> {
    Category::from_str(value)
}
