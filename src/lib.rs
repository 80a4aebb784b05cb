//! # xreport Library
//!
//! A Rust library and web service that posts tweets and searches recent tweets
//! via the Twitter/X API v2 using OAuth 1.0a User Context authentication, and
//! turns search results into compact text reports.
//!
//! ## Features
//!
//! - Client adapter with a local per-endpoint cool-down (1 call per second)
//! - Normalized errors (rate limit, upstream API failure, internal failure)
//! - Report builder joining tweets with their authors
//! - Fixed-layout text rendering of reports
//! - HTTP server exposing the client (`/health`, `/tweet`, `/search`)
//!
//! ## Configuration
//!
//! The following environment variables are required:
//! - `xapi_api_key`, `xapi_api_secret`: API Key and Secret
//! - `xapi_access_token`, `xapi_access_token_secret`: Access Token and Secret
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## API Endpoints
//!
//! - `GET /health`: Returns service health status
//! - `POST /tweet`: Posts a tweet (`{"text": "..."}`)
//! - `GET /search?query=...&count=...&format=text|json`: Searches recent tweets

pub mod config;
pub mod error;
pub mod formatter;
pub mod handlers;
pub mod oauth;
pub mod rate_limit;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{get_server_port, TwitterConfig};
pub use error::{UpstreamFailure, XApiError};
pub use formatter::{build_report, format_tweet, render_report, FormattedTweet, SearchReport};
pub use handlers::{build_router, handle_health, handle_search, handle_tweet};
pub use oauth::build_oauth1_header;
pub use rate_limit::{Clock, RateGate, SystemClock};
pub use twitter::{PostedTweet, SearchResult, Tweet, TweetMetrics, TwitterClient, TwitterUser};
