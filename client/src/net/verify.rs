//! Backend verification transport.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use async_trait::async_trait;
use flow::{ClientConfig, IdToken, LoginError, TokenVerifier, VerifyResponse};

#[derive(Debug, Clone)]
pub struct BrowserTokenVerifier {
    url: String,
}

impl BrowserTokenVerifier {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { url: config.verify_url.clone() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl TokenVerifier for BrowserTokenVerifier {
    async fn verify(&self, token: &IdToken) -> Result<VerifyResponse, LoginError> {
        #[cfg(feature = "hydrate")]
        {
            use flow::verify::{FORM_CONTENT_TYPE, verification_body};

            let resp = gloo_net::http::Request::post(&self.url)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(verification_body(token))
                .map_err(super::network_error)?
                .send()
                .await
                .map_err(super::network_error)?;
            Ok(VerifyResponse::new(resp.status()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(super::not_in_browser())
        }
    }
}
