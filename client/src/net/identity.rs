//! Identity provider transport over the Identity Toolkit REST API.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;
use flow::identity::sign_in_url;
use flow::{AuthErrorCode, ClientConfig, Credentials, IdToken, IdentityProvider, LoginError, UserCredential};

#[derive(Debug, Clone)]
pub struct BrowserIdentityProvider {
    api_key: String,
    base_url: String,
}

impl BrowserIdentityProvider {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { api_key: config.api_key.clone(), base_url: config.identity_base_url.clone() }
    }

    fn endpoint(&self) -> Result<String, LoginError> {
        if self.api_key.is_empty() {
            return Err(LoginError::Provider(AuthErrorCode::ApiKeyNotValid));
        }
        Ok(sign_in_url(&self.base_url, &self.api_key))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for BrowserIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserCredential, LoginError> {
        let url = self.endpoint()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(&flow::identity::SignInRequest::new(credentials))
                .map_err(super::network_error)?
                .send()
                .await
                .map_err(super::network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(super::network_error)?;
            flow::identity::parse_sign_in_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(super::not_in_browser())
        }
    }

    /// The token issued with the session; no refresh is attempted.
    async fn id_token(&self, credential: &UserCredential) -> Result<IdToken, LoginError> {
        Ok(credential.id_token.clone())
    }
}
