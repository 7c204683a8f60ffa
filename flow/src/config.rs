//! Client configuration: identity provider key and endpoint addresses.
//!
//! Three sources share one resolver: an arbitrary lookup (tests), the process
//! environment (CLI) and values baked in at compile time (browser build,
//! where there is no environment to read).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::identity::DEFAULT_IDENTITY_BASE_URL;
use crate::verify::DEFAULT_VERIFY_URL;

pub const API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const IDENTITY_URL_VAR: &str = "IDENTITY_TOOLKIT_URL";
pub const VERIFY_URL_VAR: &str = "VERIFY_URL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub identity_base_url: String,
    pub verify_url: String,
}

impl ClientConfig {
    /// Resolve settings through `lookup`.
    ///
    /// Required: `FIREBASE_API_KEY`.
    /// Optional: `IDENTITY_TOOLKIT_URL`, `VERIFY_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or blank, or a URL is not
    /// `http(s)`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let identity_base_url = http_url(IDENTITY_URL_VAR, lookup(IDENTITY_URL_VAR), DEFAULT_IDENTITY_BASE_URL)?
            .trim_end_matches('/')
            .to_owned();
        let verify_url = http_url(VERIFY_URL_VAR, lookup(VERIFY_URL_VAR), DEFAULT_VERIFY_URL)?;

        Ok(Self { api_key, identity_base_url, verify_url })
    }

    /// Resolve settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings captured from the build environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_KEY_VAR => option_env!("FIREBASE_API_KEY"),
                IDENTITY_URL_VAR => option_env!("IDENTITY_TOOLKIT_URL"),
                VERIFY_URL_VAR => option_env!("VERIFY_URL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

impl Default for ClientConfig {
    /// Default endpoints with no API key; sign-in fails until a key is set.
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_owned(),
            verify_url: DEFAULT_VERIFY_URL.to_owned(),
        }
    }
}

fn http_url(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(default.to_owned());
    };
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw)
    } else {
        Err(ConfigError::Invalid { var, reason: format!("expected an http(s) URL, got '{raw}'") })
    }
}
