//! Networking modules for the host REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema
//! (the server crate reuses it when projecting upstream identity payloads).

pub mod api;
pub mod types;
