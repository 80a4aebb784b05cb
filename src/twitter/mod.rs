//! Twitter/X API integration module.
//!
//! This module contains the client adapter for posting and searching tweets
//! with OAuth 1.0a User Context authentication, and the narrow API interface
//! it is built on.

mod api;
mod client;
mod search;
mod tweets;
mod types;

// Re-export public API
pub use api::{HttpTwitterClient, TwitterApi};
pub use client::{TwitterClient, CREATE_ENDPOINT, SEARCH_ENDPOINT};
pub use types::{
    CreateTweetResponse, CreatedTweetData, Includes, PostedTweet, RawPublicMetrics, RawTweet,
    RawUser, SearchMeta, SearchParams, SearchResponse, SearchResult, Tweet, TweetMetrics,
    TwitterUser,
};

#[cfg(test)]
pub(crate) use api::{parse_error_body, sanitize_for_logging};
#[cfg(test)]
pub(crate) use search::{map_search_response, map_tweet, map_user};
