//! Backend verification request.
//!
//! The backend receives the ID token as a url-encoded form field and answers
//! with a status only; the body is never read.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use crate::identity::IdToken;

pub const DEFAULT_VERIFY_URL: &str = "http://127.0.0.1:5000";
pub const ID_TOKEN_FIELD: &str = "idToken";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Url-encoded request body carrying `token` under [`ID_TOKEN_FIELD`].
#[must_use]
pub fn verification_body(token: &IdToken) -> String {
    format!("{ID_TOKEN_FIELD}={}", urlencoding::encode(token.as_str()))
}

/// Status the backend answered a verification request with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyResponse {
    pub status: u16,
}

impl VerifyResponse {
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_ok(self) -> bool {
        (200..300).contains(&self.status)
    }
}
