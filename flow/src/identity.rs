//! Identity provider types and the Identity Toolkit REST wire format.
//!
//! WIRE FORMAT
//! ===========
//! `POST {base}/accounts:signInWithPassword?key={api_key}` with a JSON body
//! `{ email, password, returnSecureToken }`. Success returns the session fields
//! parsed into [`UserCredential`]; failure returns
//! `{ "error": { "code": 400, "message": "EMAIL_NOT_FOUND" } }`.
//!
//! Parsing is pure (`status`, `body`) so every transport shares it.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

use crate::error::{AuthErrorCode, LoginError};

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// Email + password as typed into the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Short-lived bearer token proving the user's identity to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct IdToken(String);

impl IdToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for IdToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdToken(<{} bytes>)", self.0.len())
    }
}

/// Session object returned by a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCredential {
    pub uid: String,
    pub email: String,
    pub id_token: IdToken,
}

impl UserCredential {
    #[must_use]
    pub fn user(&self) -> SignedInUser {
        SignedInUser { uid: self.uid.clone(), email: self.email.clone() }
    }
}

/// Identity of a user whose token the backend accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedInUser {
    pub uid: String,
    pub email: String,
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// JSON body of a password sign-in request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

impl<'a> SignInRequest<'a> {
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { email: &credentials.email, password: &credentials.password, return_secure_token: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

// =============================================================================
// URL + PARSING
// =============================================================================

/// Build the password sign-in URL for `base` (no trailing slash) and `api_key`.
#[must_use]
pub fn sign_in_url(base: &str, api_key: &str) -> String {
    format!(
        "{}/accounts:signInWithPassword?key={}",
        base.trim_end_matches('/'),
        urlencoding::encode(api_key)
    )
}

/// Turn a sign-in HTTP response into a session or a provider error.
///
/// # Errors
///
/// Returns [`LoginError::Provider`] for an error envelope (or any non-2xx
/// status without one), and [`LoginError::MalformedResponse`] when a 2xx body
/// is unreadable or carries no ID token.
pub fn parse_sign_in_response(status: u16, body: &str) -> Result<UserCredential, LoginError> {
    if !(200..300).contains(&status) {
        let code = serde_json::from_str::<ErrorEnvelope>(body)
            .map_or(AuthErrorCode::InternalError, |env| AuthErrorCode::from_rest_message(&env.error.message));
        return Err(LoginError::Provider(code));
    }

    let resp: SignInResponse =
        serde_json::from_str(body).map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
    if resp.id_token.is_empty() {
        return Err(LoginError::MalformedResponse("sign-in response carried no idToken".to_owned()));
    }

    Ok(UserCredential { uid: resp.local_id, email: resp.email, id_token: IdToken::new(resp.id_token) })
}
