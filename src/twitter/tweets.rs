//! Tweet operations for Twitter API.
//!
//! This module contains the operation for posting tweets using the Twitter API v2.

use log::{debug, info};

use crate::error::XApiError;

use super::api::sanitize_for_logging;
use super::client::{TwitterClient, CREATE_ENDPOINT};
use super::types::PostedTweet;

impl TwitterClient {
    /// Posts a tweet to Twitter/X using the API v2 endpoint.
    ///
    /// # Parameters
    ///
    /// - `text`: The text content of the tweet to post
    ///
    /// # Returns
    ///
    /// - `Ok(PostedTweet)`: The id and text of the created tweet
    /// - `Err(XApiError)`: If the rate gate is closed, the API rejected the
    ///   request, or anything else went wrong
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use xreport::{TwitterClient, TwitterConfig};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = TwitterClient::new(TwitterConfig::from_env().unwrap());
    ///     match client.post_tweet("Hello from Rust!").await {
    ///         Ok(tweet) => println!("Tweet posted: {}", tweet.id),
    ///         Err(e) => eprintln!("Failed to post tweet: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn post_tweet(&self, text: &str) -> Result<PostedTweet, XApiError> {
        debug!(
            "Starting tweet post operation for text: '{}'",
            sanitize_for_logging(text, 100)
        );
        self.gate.check(CREATE_ENDPOINT)?;

        let response = self
            .api
            .create_tweet(text)
            .await
            .map_err(XApiError::from_boxed)?;

        info!("Tweet posted successfully with ID: {}", response.data.id);

        Ok(PostedTweet {
            id: response.data.id,
            text: response.data.text,
        })
    }
}
