//! Command-line front-end for the login flow.
//!
//! Runs the same pipeline as the browser with `reqwest` transports, so a
//! backend's verification endpoint can be exercised without a browser.

pub mod transport;

use flow::{ClientConfig, ConfigError, Credentials, IdToken, IdentityProvider, LoginOutcome, SignedInUser};
use tracing::info;

pub use transport::{HttpIdentityProvider, HttpTokenVerifier, http_client};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("http client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),
    /// Carries the same message the login form would show.
    #[error("{0}")]
    LoginFailed(String),
}

/// Sign in, fetch the ID token and have the backend verify it.
///
/// # Errors
///
/// Returns [`CliError::LoginFailed`] with the form's failure message when any
/// step fails or the backend rejects the token.
pub async fn run_login(config: &ClientConfig, credentials: &Credentials) -> Result<SignedInUser, CliError> {
    let http = http_client()?;
    let provider = HttpIdentityProvider::new(http.clone(), config);
    let verifier = HttpTokenVerifier::new(http, config);

    match flow::submit_credentials(&provider, &verifier, credentials).await {
        LoginOutcome::Verified(user) => {
            info!(uid = %user.uid, "backend accepted token");
            Ok(user)
        }
        LoginOutcome::Failed(message) => Err(CliError::LoginFailed(message)),
    }
}

/// Sign in and return the ID token without contacting the backend.
///
/// # Errors
///
/// Returns [`CliError::LoginFailed`] when sign-in or token retrieval fails.
pub async fn run_token(config: &ClientConfig, credentials: &Credentials) -> Result<IdToken, CliError> {
    let provider = HttpIdentityProvider::new(http_client()?, config);
    let credential = provider
        .sign_in(credentials)
        .await
        .map_err(|e| CliError::LoginFailed(flow::failure_message(&e)))?;
    provider
        .id_token(&credential)
        .await
        .map_err(|e| CliError::LoginFailed(flow::failure_message(&e)))
}
