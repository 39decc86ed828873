//! Entity structs mirroring the backend's JSON records.
//!
//! These map 1:1 onto the portal API's responses. The client adds no
//! invariants beyond what form validation enforces at submission time.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! wire contract can be dumped via `cfp schema`.

mod issue;
mod response;
mod user;

pub use issue::Issue;
pub use response::IssueResponse;
pub use user::User;
