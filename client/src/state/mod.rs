//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `debug`) so components depend on small
//! focused models. Each model is wrapped in an `RwSignal` by `App`.

pub mod auth;
pub mod debug;
