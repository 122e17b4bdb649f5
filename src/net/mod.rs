//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps endpoints to typed calls, `transport` is the fetch seam,
//! `error` the failure taxonomy, and `types` the shared wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod mock_transport;
pub mod transport;
pub mod types;
