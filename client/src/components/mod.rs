//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth branches and debug tooling while reading and
//! writing shared state from Leptos context providers.

pub mod clerk_mount;
pub mod debug_panel;
pub mod environment_card;
pub mod loading_view;
pub mod profile_card;
pub mod signed_in_view;
pub mod signed_out_view;
