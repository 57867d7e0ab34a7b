//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls against the server's Clerk endpoints and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
