//! Networking modules for the recognition backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON wire schema.

pub mod api;
pub mod types;
