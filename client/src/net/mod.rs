//! Data access for the list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the in-memory catalog in the async request shape a real
//! product API would have, including its latency.

pub mod api;
