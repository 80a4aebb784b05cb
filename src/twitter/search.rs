//! Tweet search functionality for Twitter API.
//!
//! This module contains the recent-search operation and the mapping from raw
//! API payloads to [`Tweet`] and [`TwitterUser`] records.

use log::{debug, info};

use crate::error::XApiError;

use super::api::sanitize_for_logging;
use super::client::{TwitterClient, SEARCH_ENDPOINT};
use super::types::{
    RawTweet, RawUser, SearchParams, SearchResponse, SearchResult, Tweet, TweetMetrics,
    TwitterUser,
};

/// Maps a raw tweet, defaulting every missing optional field.
pub(crate) fn map_tweet(raw: RawTweet) -> Tweet {
    let metrics = raw.public_metrics.unwrap_or_default();
    Tweet {
        id: raw.id,
        text: raw.text,
        author_id: raw.author_id.unwrap_or_default(),
        metrics: TweetMetrics {
            likes: metrics.like_count.unwrap_or(0),
            retweets: metrics.retweet_count.unwrap_or(0),
            replies: metrics.reply_count.unwrap_or(0),
            quotes: metrics.quote_count.unwrap_or(0),
        },
        created_at: raw.created_at.unwrap_or_default(),
    }
}

pub(crate) fn map_user(raw: RawUser) -> TwitterUser {
    TwitterUser {
        id: raw.id,
        username: raw.username,
        name: raw.name,
        verified: raw.verified.unwrap_or(false),
    }
}

/// Splits a search response into normalized tweets and users.
///
/// A response without `data` or without `includes.users` yields empty lists.
pub(crate) fn map_search_response(response: SearchResponse) -> SearchResult {
    let tweets = response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(map_tweet)
        .collect();

    let users = response
        .includes
        .and_then(|includes| includes.users)
        .unwrap_or_default()
        .into_iter()
        .map(map_user)
        .collect();

    SearchResult { tweets, users }
}

impl TwitterClient {
    /// Searches recent tweets matching `query`.
    ///
    /// Requests up to `count` results with the author expansion, public metrics
    /// and creation time. Pagination is not followed.
    ///
    /// # Returns
    ///
    /// - `Ok(SearchResult)`: The tweets of the first page and their authors
    /// - `Err(XApiError)`: If the rate gate is closed, the API rejected the
    ///   request, or anything else went wrong
    pub async fn search_tweets(&self, query: &str, count: u32) -> Result<SearchResult, XApiError> {
        debug!(
            "Starting tweet search for query: '{}' (max {})",
            sanitize_for_logging(query, 100),
            count
        );
        self.gate.check(SEARCH_ENDPOINT)?;

        let params = SearchParams::new(query, count);
        let response = self
            .api
            .search_recent(&params)
            .await
            .map_err(XApiError::from_boxed)?;

        if let Some(result_count) = response.meta.as_ref().and_then(|m| m.result_count) {
            debug!("API reported result_count: {}", result_count);
        }

        let result = map_search_response(response);
        info!(
            "Fetched {} tweets for query: \"{}\"",
            result.tweets.len(),
            sanitize_for_logging(query, 100)
        );

        Ok(result)
    }
}
