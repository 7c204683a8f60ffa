//! Shared login flow for the browser client and the CLI.
//!
//! This crate owns everything both front-ends agree on: credential and token
//! types, the identity-provider and verifier seams, the sign-in → token →
//! verify pipeline, and the exact user-facing failure messages. It performs no
//! I/O itself; transports live with their callers (`gloo-net` in the client,
//! `reqwest` in the CLI).

pub mod config;
pub mod error;
pub mod identity;
pub mod pipeline;
pub mod verify;

pub use config::{ClientConfig, ConfigError};
pub use error::{AuthErrorCode, LoginError};
pub use identity::{Credentials, IdToken, SignedInUser, UserCredential};
pub use pipeline::{IdentityProvider, LoginOutcome, TokenVerifier, submit_credentials};
pub use verify::VerifyResponse;

/// Prefix shared by every failure message shown under the login form.
pub const LOGIN_FAILED_PREFIX: &str = "Login failed: ";

/// Message shown when the backend answers with a non-success status.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Login failed: Invalid credentials";

/// Build the message shown for a failed sign-in, token fetch or transport error.
#[must_use]
pub fn failure_message(err: &LoginError) -> String {
    format!("{LOGIN_FAILED_PREFIX}{err}")
}
