//! Shared contracts between the ScholarSight frontend and the document backend.
//!
//! Plain serde types only: wire DTOs for the upload/query API and the in-memory
//! chat model. No I/O lives here.

pub mod api;
pub mod chat;
