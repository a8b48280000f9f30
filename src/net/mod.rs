//! Networking modules for the widget endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the three endpoint calls, `transport` is the `fetch` seam,
//! `types` defines the wire schema, and `error` the shared failure type.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod transport;
pub mod types;
