//! Auth state for the current page lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Set by the login page after the backend accepts a token and read by the
//! home page. Held in memory only; a reload starts signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use flow::SignedInUser;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SignedInUser>,
}

impl AuthState {
    /// Line shown on the home page for a signed-in user.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.user.as_ref().map(|user| format!("Signed in as {}", user.email))
    }
}
