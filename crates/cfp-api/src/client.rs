//! The portal HTTP client.
//!
//! One `PortalClient` per CLI invocation. Every request carries the persisted
//! `X-Device-ID`; a stored, non-expired token is attached as a Bearer header.
//! A 401 or 440 response clears stored credentials at most once per client —
//! the CLI analogue of the browser interceptor's single redirect to the
//! access-denied page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use cfp_config::ApiConfig;
use cfp_core::entities::{Issue, User};
use cfp_core::enums::IssueStatus;
use cfp_core::validate::SubmissionForm;

use crate::error::ApiError;
use crate::wire;

/// HTTP status the backend uses for "login session expired".
const STATUS_SESSION_EXPIRED: u16 = 440;

/// Ensures credential teardown runs at most once per client.
#[derive(Debug, Default)]
pub(crate) struct TeardownGuard(AtomicBool);

impl TeardownGuard {
    /// Returns `true` the first time, `false` on every later call.
    pub(crate) fn begin(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub(crate) fn fired(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    device_id: String,
    teardown: TeardownGuard,
}

impl PortalClient {
    /// Build a client from API config, resolving the persisted device ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be built or the device
    /// ID cannot be generated/persisted.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let device_id = cfp_auth::device_id::get_or_create()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            device_id,
            teardown: TeardownGuard::default(),
        })
    }

    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Whether a 401/440 already tore down the stored session.
    #[must_use]
    pub fn session_torn_down(&self) -> bool {
        self.teardown.fired()
    }

    // --- Endpoints ---

    /// `POST /login`. Returns the raw session token; the caller decides
    /// where to store it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Server` with the backend's message on bad
    /// credentials, `ApiError::Decode` if no token comes back.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = wire::LoginRequest {
            email,
            password,
            device_id: &self.device_id,
        };
        let resp: wire::LoginResponse = self.send(self.post("/login").json(&body)).await?;
        if resp.token.is_empty() {
            return Err(ApiError::Decode("no token received from backend".into()));
        }
        Ok(resp.token)
    }

    /// `GET /profile`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` (after teardown) without a valid token.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let resp: wire::ProfileResponse = self.send(self.get("/profile")).await?;
        Ok(resp.user)
    }

    /// `GET /api/get_all_issues`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or contract failures.
    pub async fn all_issues(&self) -> Result<Vec<Issue>, ApiError> {
        let listing: wire::IssueListing = self.send(self.get("/api/get_all_issues")).await?;
        Ok(listing.into_issues())
    }

    /// `GET /api/get_issue_details/:id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or contract failures.
    pub async fn issue_details(&self, issue_id: &str) -> Result<Issue, ApiError> {
        let path = format!("/api/get_issue_details/{issue_id}");
        let payload: wire::IssuePayload = self.send(self.get(&path)).await?;
        Ok(payload.into_issue())
    }

    /// `POST /api/submit_issue`. Returns the assigned ticket ID.
    ///
    /// The form must already be validated; identity fields are sent as
    /// explicit nulls for anonymous submissions. A logged-in student's
    /// `user_id` rides along on named submissions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or contract failures.
    pub async fn submit_issue(
        &self,
        form: &SubmissionForm,
        user_id: Option<&str>,
    ) -> Result<String, ApiError> {
        let category = form.category.map(|c| c.as_str()).unwrap_or_default();
        let named = !form.anonymous;
        let body = wire::SubmitIssueRequest {
            title: &form.title,
            description: &form.description,
            category,
            name: form.name.as_deref().filter(|_| named),
            user_id: user_id.filter(|_| named),
            email: form.email.as_deref().filter(|_| named),
            phone: form.phone.as_deref().filter(|_| named),
            admission: form.admission_number.as_deref().filter(|_| named),
        };
        let resp: wire::SubmitIssueResponse =
            self.send(self.post("/api/submit_issue").json(&body)).await?;
        Ok(resp.ticket_id)
    }

    /// `POST /api/track_issue`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Server` when the ticket is unknown.
    pub async fn track_issue(&self, ticket_id: &str) -> Result<Issue, ApiError> {
        let body = wire::TrackIssueRequest { ticket_id };
        let payload: wire::IssuePayload =
            self.send(self.post("/api/track_issue").json(&body)).await?;
        Ok(payload.into_issue())
    }

    /// `POST /api/update_status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or server failures.
    pub async fn update_status(
        &self,
        issue_id: &str,
        status: IssueStatus,
    ) -> Result<(), ApiError> {
        let body = wire::UpdateStatusRequest {
            issue_id,
            status: status.as_str(),
        };
        self.send_expect_ok(self.post("/api/update_status").json(&body))
            .await
    }

    /// `POST /api/post_response_to_issue`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or server failures.
    pub async fn post_response(&self, issue_id: &str, message: &str) -> Result<(), ApiError> {
        let body = wire::PostResponseRequest { issue_id, message };
        self.send_expect_ok(self.post("/api/post_response_to_issue").json(&body))
            .await
    }

    /// `POST /api/generate_ai_response`: draft a reply for a description.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or contract failures.
    pub async fn generate_ai_response(&self, issue_description: &str) -> Result<String, ApiError> {
        let body = wire::GenerateAiRequest { issue_description };
        let resp: wire::AiDraftResponse = self
            .send(self.post("/api/generate_ai_response").json(&body))
            .await?;
        Ok(resp.response)
    }

    /// `GET /api/admin/ai_insights`: free-form insights panel payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, auth, or server failures.
    pub async fn ai_insights(&self) -> Result<serde_json::Value, ApiError> {
        self.send(self.get("/api/admin/ai_insights")).await
    }

    // --- Request plumbing ---

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Build a request with the device header and, when a valid token is
    /// stored, the Bearer header. Expired tokens were already cleared by
    /// `resolve_token`.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .http
            .request(method, url)
            .header("X-Device-ID", &self.device_id);
        if let Some(token) = cfp_auth::resolve_token() {
            tracing::debug!(path, "attaching bearer token");
            builder = builder.bearer_auth(token.raw);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = builder.send().await?;
        let resp = check_status(resp, &self.teardown, clear_stored_credentials).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like `send`, for endpoints whose success body we don't consume.
    async fn send_expect_ok(&self, builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let resp = builder.send().await?;
        check_status(resp, &self.teardown, clear_stored_credentials)
            .await
            .map(|_| ())
    }
}

/// The response-interceptor policy: 440 and 401 clear stored credentials
/// (at most once per guard) and map to their dedicated errors; other
/// non-2xx statuses surface the backend's error string.
async fn check_status(
    resp: reqwest::Response,
    teardown: &TeardownGuard,
    clear_credentials: impl FnOnce(),
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.as_u16() == STATUS_SESSION_EXPIRED {
        teardown_session(teardown, clear_credentials, "session expired (440)");
        return Err(ApiError::SessionExpired);
    }
    if status == StatusCode::UNAUTHORIZED {
        teardown_session(teardown, clear_credentials, "unauthorized (401)");
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: extract_error_message(&body),
        });
    }
    Ok(resp)
}

fn teardown_session(guard: &TeardownGuard, clear_credentials: impl FnOnce(), reason: &str) {
    if !guard.begin() {
        tracing::debug!(reason, "session already torn down");
        return;
    }
    tracing::warn!(reason, "clearing stored credentials");
    clear_credentials();
}

fn clear_stored_credentials() {
    if let Err(error) = cfp_auth::logout() {
        tracing::warn!(%error, "failed to clear credentials during teardown");
    }
}

/// Pull the backend's `{"error": "..."}` message out of a failure body,
/// falling back to the raw body, then to a generic message.
fn extract_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<wire::ErrorBody>(body) {
        if let Some(error) = parsed.error {
            if !error.trim().is_empty() {
                return error;
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "server error. try again later.".into()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .expect("valid mock response"),
        )
    }

    #[tokio::test]
    async fn session_expiry_maps_to_its_error_and_clears_once() {
        let guard = TeardownGuard::default();
        let cleared = Cell::new(0u32);

        let err = check_status(mock_response(440, ""), &guard, || {
            cleared.set(cleared.get() + 1);
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::SessionExpired));
        assert_eq!(cleared.get(), 1);

        let err = check_status(mock_response(440, ""), &guard, || {
            cleared.set(cleared.get() + 1);
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::SessionExpired));
        assert_eq!(cleared.get(), 1, "credentials cleared at most once per client");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_its_error_and_tears_down() {
        let guard = TeardownGuard::default();
        let cleared = Cell::new(false);

        let err = check_status(mock_response(401, ""), &guard, || cleared.set(true))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert!(cleared.get());
        assert!(guard.fired());
    }

    #[tokio::test]
    async fn server_errors_surface_the_backend_message_without_teardown() {
        let guard = TeardownGuard::default();

        let err = check_status(
            mock_response(500, r#"{"error": "database is down"}"#),
            &guard,
            || panic!("5xx must not tear down the session"),
        )
        .await
        .unwrap_err();

        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database is down");
            }
            other => panic!("expected server error, got {other:?}"),
        }
        assert!(!guard.fired());
    }

    #[tokio::test]
    async fn success_passes_the_response_through() {
        let guard = TeardownGuard::default();
        let resp = check_status(mock_response(200, "{}"), &guard, || {
            panic!("2xx must not tear down the session")
        })
        .await
        .expect("200 should pass through");
        assert_eq!(resp.status().as_u16(), 200);
        assert!(!guard.fired());
    }

    #[test]
    fn teardown_guard_fires_exactly_once() {
        let guard = TeardownGuard::default();
        assert!(!guard.fired());
        assert!(guard.begin(), "first begin should win");
        assert!(!guard.begin(), "second begin should be a no-op");
        assert!(!guard.begin());
        assert!(guard.fired());
    }

    #[test]
    fn error_message_prefers_backend_error_field() {
        let msg = extract_error_message(r#"{"error": "Invalid ticket ID"}"#);
        assert_eq!(msg, "Invalid ticket ID");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("gateway exploded"), "gateway exploded");
    }

    #[test]
    fn error_message_handles_empty_body() {
        assert_eq!(extract_error_message(""), "server error. try again later.");
        assert_eq!(
            extract_error_message(r#"{"error": ""}"#),
            r#"{"error": ""}"#
        );
    }
}
