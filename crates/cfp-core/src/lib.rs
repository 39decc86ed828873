//! # cfp-core
//!
//! Core types shared across the feedback portal CLI crates:
//! - Entity structs mirroring the backend's JSON records (issues, responses, users)
//! - Status, category, role, and submission-type enums with tolerant deserialization
//! - Submission form validation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod time;
pub mod validate;

pub use errors::CoreError;
