//! Async flows between the UI and the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow takes the `EventApi`, the current `Session`, and plain inputs,
//! and returns data or a `ClientError`. Flows never touch signals; pages
//! apply the results, which keeps every flow testable with a scripted
//! transport.

pub mod attendees;
pub mod auth;
pub mod listing;
pub mod mutations;
