//! `reqwest` transports for the identity provider and the backend.

use std::time::Duration;

use async_trait::async_trait;
use flow::identity::{SignInRequest, parse_sign_in_response, sign_in_url};
use flow::verify::{FORM_CONTENT_TYPE, verification_body};
use flow::{ClientConfig, Credentials, IdToken, IdentityProvider, LoginError, TokenVerifier, UserCredential, VerifyResponse};
use reqwest::header::CONTENT_TYPE;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client. Only the connect phase is bounded; a slow response is
/// waited for.
///
/// # Errors
///
/// Returns the builder error if the TLS backend cannot be initialised.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
}

fn network_error(err: reqwest::Error) -> LoginError {
    LoginError::Network(err.to_string())
}

pub struct HttpIdentityProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self { http, api_key: config.api_key.clone(), base_url: config.identity_base_url.clone() }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserCredential, LoginError> {
        let response = self
            .http
            .post(sign_in_url(&self.base_url, &self.api_key))
            .json(&SignInRequest::new(credentials))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        parse_sign_in_response(status, &body)
    }

    async fn id_token(&self, credential: &UserCredential) -> Result<IdToken, LoginError> {
        Ok(credential.id_token.clone())
    }
}

pub struct HttpTokenVerifier {
    http: reqwest::Client,
    url: String,
}

impl HttpTokenVerifier {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self { http, url: config.verify_url.clone() }
    }
}

#[async_trait(?Send)]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &IdToken) -> Result<VerifyResponse, LoginError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(verification_body(token))
            .send()
            .await
            .map_err(network_error)?;
        Ok(VerifyResponse::new(response.status().as_u16()))
    }
}
