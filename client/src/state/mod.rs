//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `login`) so pages depend on small
//! focused models that are testable without a reactive runtime.

pub mod auth;
pub mod login;
