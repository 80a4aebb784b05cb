//! Data types for the Twitter API binding.
//!
//! The `Raw*` and `*Response` types mirror the v2 JSON payloads and tolerate
//! missing optional fields. The remaining types are the normalized records
//! handed to callers and to the formatter.

use serde::{Deserialize, Serialize};

/// Engagement counters of a tweet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetMetrics {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
}

/// A tweet as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    /// Empty when the API did not include the author id
    pub author_id: String,
    pub metrics: TweetMetrics,
    /// RFC 3339 timestamp, empty when unknown
    pub created_at: String,
}

/// The author of a tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    /// Handle, without the leading `@`
    pub username: String,
    /// Display name
    pub name: String,
    pub verified: bool,
}

/// A tweet that was just created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedTweet {
    pub id: String,
    pub text: String,
}

/// Tweets and their expanded authors for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub tweets: Vec<Tweet>,
    pub users: Vec<TwitterUser>,
}

/// Parameters of a recent-search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub max_results: u32,
    pub expansions: Vec<String>,
    pub tweet_fields: Vec<String>,
    pub user_fields: Vec<String>,
}

impl SearchParams {
    /// Search parameters with author expansion, metrics and creation time.
    pub fn new(query: &str, max_results: u32) -> Self {
        Self {
            query: query.to_string(),
            max_results,
            expansions: vec!["author_id".to_string()],
            tweet_fields: vec!["public_metrics".to_string(), "created_at".to_string()],
            user_fields: vec![
                "username".to_string(),
                "name".to_string(),
                "verified".to_string(),
            ],
        }
    }

    /// Query string pairs in the order they are sent.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.query.clone()),
            ("max_results".to_string(), self.max_results.to_string()),
            ("expansions".to_string(), self.expansions.join(",")),
            ("tweet.fields".to_string(), self.tweet_fields.join(",")),
            ("user.fields".to_string(), self.user_fields.join(",")),
        ]
    }
}

/// `data` object of `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweetData {
    pub id: String,
    pub text: String,
}

/// Response body of `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTweetResponse {
    pub data: CreatedTweetData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPublicMetrics {
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub retweet_count: Option<u64>,
    #[serde(default)]
    pub reply_count: Option<u64>,
    #[serde(default)]
    pub quote_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<RawPublicMetrics>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Option<Vec<RawUser>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: Option<u64>,
}

/// Response body of `GET /2/tweets/search/recent`.
///
/// `data` and `includes` are absent when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<RawTweet>>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
}
