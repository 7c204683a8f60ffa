//! The login pipeline: sign in → fetch ID token → verify with the backend.
//!
//! DESIGN
//! ======
//! Each remote step sits behind a trait so the browser (`gloo-net`), the CLI
//! (`reqwest`) and tests (fakes) supply their own transport. The steps run
//! strictly in order and every failure is folded into a [`LoginOutcome`];
//! nothing is retried and nothing escapes as an error.
//!
//! The traits are `?Send` because browser futures are not `Send`.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use async_trait::async_trait;

use crate::error::LoginError;
use crate::identity::{Credentials, IdToken, SignedInUser, UserCredential};
use crate::verify::VerifyResponse;
use crate::{INVALID_CREDENTIALS_MESSAGE, failure_message};

/// Identity provider capable of password sign-in.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Authenticate `credentials` and return the provider's session object.
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserCredential, LoginError>;

    /// Obtain the current ID token for a signed-in session.
    async fn id_token(&self, credential: &UserCredential) -> Result<IdToken, LoginError>;
}

/// Backend that checks an ID token and answers with a status.
#[async_trait(?Send)]
pub trait TokenVerifier {
    /// Forward `token` to the backend.
    ///
    /// An `Err` means no response arrived; any HTTP status is an `Ok`.
    async fn verify(&self, token: &IdToken) -> Result<VerifyResponse, LoginError>;
}

/// Terminal result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The backend accepted the token.
    Verified(SignedInUser),
    /// Any failure, carrying the exact message to show under the form.
    Failed(String),
}

impl LoginOutcome {
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Verified(_) => None,
            Self::Failed(message) => Some(message),
        }
    }
}

/// Run one login attempt end to end.
pub async fn submit_credentials(
    provider: &dyn IdentityProvider,
    verifier: &dyn TokenVerifier,
    credentials: &Credentials,
) -> LoginOutcome {
    match authenticate_and_verify(provider, verifier, credentials).await {
        Ok((user, response)) if response.is_ok() => {
            log::debug!("login verified for uid {}", user.uid);
            LoginOutcome::Verified(user)
        }
        Ok((_, response)) => {
            log::debug!("backend rejected token with status {}", response.status);
            LoginOutcome::Failed(INVALID_CREDENTIALS_MESSAGE.to_owned())
        }
        Err(err) => {
            log::error!("Login failed: {err:?}");
            LoginOutcome::Failed(failure_message(&err))
        }
    }
}

async fn authenticate_and_verify(
    provider: &dyn IdentityProvider,
    verifier: &dyn TokenVerifier,
    credentials: &Credentials,
) -> Result<(SignedInUser, VerifyResponse), LoginError> {
    let credential = provider.sign_in(credentials).await?;
    log::debug!("signed in as {}", credential.uid);
    let token = provider.id_token(&credential).await?;
    let response = verifier.verify(&token).await?;
    Ok((credential.user(), response))
}
