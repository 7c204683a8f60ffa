//! Browser transports for the login pipeline.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the same types exist but fail with a network error,
//! since sign-in only ever runs in the browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod identity;
pub mod verify;

use std::sync::{Arc, OnceLock};

use flow::{ClientConfig, IdentityProvider, LoginError, TokenVerifier};

pub use identity::BrowserIdentityProvider;
pub use verify::BrowserTokenVerifier;

/// The provider and verifier the login page talks to, provided via context.
#[derive(Clone)]
pub struct LoginServices {
    pub provider: Arc<dyn IdentityProvider + Send + Sync>,
    pub verifier: Arc<dyn TokenVerifier + Send + Sync>,
}

impl LoginServices {
    #[must_use]
    pub fn new(
        provider: Arc<dyn IdentityProvider + Send + Sync>,
        verifier: Arc<dyn TokenVerifier + Send + Sync>,
    ) -> Self {
        Self { provider, verifier }
    }

    /// Browser transports for `config`.
    #[must_use]
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(Arc::new(BrowserIdentityProvider::new(config)), Arc::new(BrowserTokenVerifier::new(config)))
    }

    /// Browser transports configured from values baked in at build time.
    ///
    /// Resolved once per process; every render shares the same transports.
    /// A build without `FIREBASE_API_KEY` still renders; every sign-in then
    /// fails with the provider's invalid-API-key error.
    #[must_use]
    pub fn from_build_env() -> Self {
        static SERVICES: OnceLock<LoginServices> = OnceLock::new();
        SERVICES
            .get_or_init(|| {
                let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
                    log::warn!("login config incomplete: {e}");
                    ClientConfig::default()
                });
                Self::browser(&config)
            })
            .clone()
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> LoginError {
    LoginError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> LoginError {
    LoginError::Network(err.to_string())
}
