//! Configuration module for the xreport service.
//!
//! This module contains configuration structures and environment variable handling
//! for the Twitter/X API integration.

use log::{debug, info, warn};
use std::env;

/// Default base URL of the Twitter/X API.
pub const DEFAULT_BASE_URL: &str = "https://api.x.com";

/// Configuration struct for Twitter/X API credentials.
///
/// This struct holds the four long-lived OAuth 1.0a User Context credentials
/// required to post and search tweets via the Twitter/X API v2 endpoints.
/// The values are opaque; invalid credentials only surface as a failure from
/// the first API call.
#[derive(Clone)]
pub struct TwitterConfig {
    /// The API Key (OAuth consumer key)
    pub api_key: String,
    /// The API Key Secret (OAuth consumer secret)
    pub api_secret: String,
    /// The Access Token of the acting user
    pub access_token: String,
    /// The Access Token Secret of the acting user
    pub access_token_secret: String,
    /// Base URL for API requests, without trailing slash
    pub base_url: String,
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &"[REDACTED]")
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Masks a secret for logging, keeping at most the first and last 8 characters.
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    let prefix: String = chars.iter().take(8).collect();

    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

/// What the debug log shows for a credential. Secrets are reduced to their length.
pub(crate) fn credential_preview(value: &str, secret: bool) -> String {
    if secret {
        format!("[REDACTED, {} chars]", value.chars().count())
    } else {
        mask_secret(value)
    }
}

impl TwitterConfig {
    /// Creates a new `TwitterConfig` from explicit credential strings, using the default base URL.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads one required credential from the environment.
    fn load_credential(
        name: &str,
        secret: bool,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match env::var(name) {
            Ok(value) => {
                info!(
                    "Found {} environment variable with length: {}",
                    name,
                    value.len()
                );
                debug!("{} (masked): {}", name, credential_preview(&value, secret));

                if value.is_empty() {
                    warn!("{} is empty, API calls will likely be rejected", name);
                }
                Ok(value)
            }
            Err(e) => Err(format!("Missing {} environment variable: {}", name, e).into()),
        }
    }

    /// Creates a new `TwitterConfig` instance by loading credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_api_key`: API Key (consumer key)
    /// - `xapi_api_secret`: API Key Secret (consumer secret)
    /// - `xapi_access_token`: Access Token
    /// - `xapi_access_token_secret`: Access Token Secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: API base URL (defaults to `https://api.x.com`)
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If all required environment variables are present
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Naming the first missing variable
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use xreport::TwitterConfig;
    ///
    /// let config = TwitterConfig::from_env().unwrap();
    /// println!("Using {}", config.base_url);
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading Twitter configuration from environment variables");

        let api_key = Self::load_credential("xapi_api_key", false)?;
        let api_secret = Self::load_credential("xapi_api_secret", true)?;
        let access_token = Self::load_credential("xapi_access_token", false)?;
        let access_token_secret = Self::load_credential("xapi_access_token_secret", true)?;

        let config = Self::new(api_key, api_secret, access_token, access_token_secret);
        let config = match env::var("xapi_base_url") {
            Ok(base_url) if !base_url.is_empty() => {
                info!("Using API base URL override: {}", base_url);
                config.with_base_url(base_url)
            }
            _ => config,
        };

        info!("Twitter configuration loaded successfully");
        Ok(config)
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set, it defaults to 3000.
///
/// # Panics
///
/// This function will panic if the `PORT` environment variable is set to a value
/// that cannot be parsed as a valid port number.
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
