//! # cfp-api
//!
//! The feedback portal's HTTP contract, wrapped for the CLI.
//!
//! `PortalClient` is the only way the CLI talks to the backend: it attaches
//! the persisted device ID and any stored session token to every request,
//! normalizes the backend's loose response envelopes, and implements the
//! 401/440 teardown policy. No retries, no circuit breaking — failures
//! surface immediately as `ApiError`.

pub mod client;
pub mod error;
pub mod wire;

pub use client::PortalClient;
pub use error::ApiError;
