pub mod ai;
pub mod auth;
pub mod issue;
pub mod tickets;

pub use ai::AiCommands;
pub use auth::AuthCommands;
pub use issue::{IssueCommands, SubmitArgs};
pub use tickets::TicketsCommands;
