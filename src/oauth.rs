//! OAuth authentication module for Twitter/X API integration.
//!
//! This module implements OAuth 1.0a User Context request signing (HMAC-SHA1),
//! which the Twitter API v2 accepts for both posting and searching tweets.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

use crate::config::TwitterConfig;

type HmacSha1 = Hmac<Sha1>;

/// Percent-encodes a string as required by OAuth 1.0a (RFC 3986 unreserved set).
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Generates a random 32-character alphanumeric nonce.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Builds the OAuth 1.0a signature base string.
///
/// # Parameters
///
/// - `method`: HTTP method, e.g. `GET`
/// - `base_url`: Request URL without query string
/// - `params`: All query, form and `oauth_*` parameters (not yet encoded)
///
/// # Returns
///
/// `METHOD&encoded(url)&encoded(sorted, encoded params)`
pub fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    )
}

/// Signs a base string with HMAC-SHA1 and returns the base64 digest.
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| format!("Failed to initialize HMAC-SHA1: {}", e))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Builds the Authorization header for OAuth 1.0a User Context authentication.
///
/// # Parameters
///
/// - `config`: The four credential strings
/// - `method`: HTTP method of the request
/// - `base_url`: Request URL without query string
/// - `request_params`: Query (and form) parameters that are part of the signature
/// - `nonce`: A unique nonce for this request
/// - `timestamp`: Seconds since the Unix epoch
///
/// # Format
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", oauth_signature="...", ...
/// ```
pub fn build_oauth1_header(
    config: &TwitterConfig,
    method: &str,
    base_url: &str,
    request_params: &[(String, String)],
    nonce: &str,
    timestamp: i64,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let mut oauth_params: Vec<(String, String)> = vec![
        ("oauth_consumer_key".into(), config.api_key.clone()),
        ("oauth_nonce".into(), nonce.to_string()),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), timestamp.to_string()),
        ("oauth_token".into(), config.access_token.clone()),
        ("oauth_version".into(), "1.0".into()),
    ];

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(request_params);

    let base_string = signature_base_string(method, base_url, &all_params);
    let signature = sign(
        &base_string,
        &config.api_secret,
        &config.access_token_secret,
    )?;
    oauth_params.push(("oauth_signature".into(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", fields))
}

/// Builds an OAuth 1.0a header with a fresh nonce and the current timestamp.
pub fn build_oauth1_header_now(
    config: &TwitterConfig,
    method: &str,
    base_url: &str,
    request_params: &[(String, String)],
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    build_oauth1_header(
        config,
        method,
        base_url,
        request_params,
        &generate_nonce(),
        chrono::Utc::now().timestamp(),
    )
}
