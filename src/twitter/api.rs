//! Core Twitter API utilities.
//!
//! This module contains the narrow [`TwitterApi`] interface used by the client
//! adapter, and its HTTP implementation that signs requests with OAuth 1.0a
//! and decodes the v2 JSON payloads.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::TwitterConfig;
use crate::error::UpstreamFailure;
use crate::oauth::{build_oauth1_header_now, percent_encode};

use super::types::{CreateTweetResponse, SearchParams, SearchResponse};

/// The two upstream operations the client adapter relies on.
///
/// Implementations report structured API failures as a boxed
/// [`UpstreamFailure`]; any other error is treated as unexpected.
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Publishes a text tweet.
    async fn create_tweet(
        &self,
        text: &str,
    ) -> Result<CreateTweetResponse, Box<dyn std::error::Error + Send + Sync>>;

    /// Searches recent tweets.
    async fn search_recent(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' => ' ',
            '\r' => ' ',
            '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    match sanitized.char_indices().nth(max_len) {
        Some((cut, _)) => format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..cut],
            text.len()
        ),
        None => sanitized,
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Error body of the v2 API: either an RFC 7807 problem or a v1-style `errors` list.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    errors: Option<Vec<ApiErrorEntry>>,
}

/// Builds an [`UpstreamFailure`] from a non-success response.
///
/// The message is taken from `detail`, then the first `errors[].message`, then
/// `title`. The code is the first `errors[].code` if present and non-empty,
/// otherwise the HTTP status. Bodies that are not JSON produce an empty message.
pub(crate) fn parse_error_body(status: u16, body: &str) -> UpstreamFailure {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let first_error = parsed.errors.as_ref().and_then(|errors| errors.first());

    let message = parsed
        .detail
        .clone()
        .or_else(|| first_error.and_then(|e| e.message.clone()))
        .or_else(|| parsed.title.clone())
        .unwrap_or_default();

    let code = match first_error.and_then(|e| e.code.as_ref()) {
        Some(serde_json::Value::String(code)) if !code.is_empty() => code.clone(),
        Some(serde_json::Value::Number(code)) => code.to_string(),
        _ => status.to_string(),
    };

    UpstreamFailure {
        message,
        code,
        status: Some(status),
    }
}

/// Sends a signed request and returns the response body.
///
/// # Parameters
///
/// - `request_builder`: A configured reqwest::RequestBuilder carrying the OAuth header
/// - `operation_name`: Human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok(String)`: The API response body on success
/// - `Err(UpstreamFailure)` (boxed): If the API answered with a non-success status
/// - `Err(...)`: Any transport error
pub(crate) async fn make_authenticated_request(
    request_builder: reqwest::RequestBuilder,
    operation_name: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Making authenticated request for operation: {}",
        operation_name
    );

    let response = request_builder.send().await?;

    let status = response.status();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    if status.is_success() {
        let response_text = response.text().await?;
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            response_text.len()
        );
        return Ok(response_text);
    }

    let error_text = response.text().await?;
    error!("Operation '{}' failed - Status: {}", operation_name, status);
    debug!(
        "Error response for '{}': {}",
        operation_name,
        sanitize_for_logging(&error_text, 200)
    );

    Err(Box::new(parse_error_body(status.as_u16(), &error_text)))
}

/// [`TwitterApi`] over HTTPS with OAuth 1.0a User Context signing.
pub struct HttpTwitterClient {
    config: TwitterConfig,
    http: Client,
}

impl HttpTwitterClient {
    pub fn new(config: TwitterConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl TwitterApi for HttpTwitterClient {
    async fn create_tweet(
        &self,
        text: &str,
    ) -> Result<CreateTweetResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/2/tweets", self.config.base_url);
        debug!("Target URL: {}", url);

        // JSON bodies are not part of the OAuth 1.0a signature
        let auth_header = build_oauth1_header_now(&self.config, "POST", &url, &[])?;
        debug!("Request headers: Authorization: OAuth [REDACTED], Content-Type: application/json");

        let request_builder = self
            .http
            .post(&url)
            .header("Authorization", auth_header)
            .json(&json!({ "text": text }));

        let response_text = make_authenticated_request(request_builder, "post_tweet").await?;
        Ok(serde_json::from_str(&response_text)?)
    }

    async fn search_recent(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/2/tweets/search/recent", self.config.base_url);
        let query_pairs = params.to_query_pairs();
        debug!("Search URL: {}", url);
        debug!(
            "Search query: {}",
            sanitize_for_logging(&params.query, 100)
        );

        let auth_header = build_oauth1_header_now(&self.config, "GET", &url, &query_pairs)?;

        // Encode with the same RFC 3986 rules used for the signature
        let query_string = query_pairs
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request_builder = self
            .http
            .get(format!("{}?{}", url, query_string))
            .header("Authorization", auth_header);

        let response_text = make_authenticated_request(request_builder, "search_tweets").await?;
        Ok(serde_json::from_str(&response_text)?)
    }
}
