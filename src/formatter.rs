//! Search report formatting.
//!
//! Joins tweets with their authors, numbers the joined tweets and renders them
//! as the plain-text report consumed downstream. Everything here is pure.

use serde::Serialize;
use std::collections::HashMap;

use crate::twitter::{Tweet, TweetMetrics, TwitterUser};

/// Host used for tweet permalinks.
pub const PERMALINK_HOST: &str = "twitter.com";

const REPORT_TITLE: &str = "ツイートの取得結果";
const NO_RESULTS_LINE: &str = "クエリに合うツイートが見つかりませんでした";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAuthor {
    pub username: String,
}

/// One numbered tweet of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTweet {
    /// Position in the report, starting at 1
    pub position: usize,
    pub author: FormattedAuthor,
    pub content: String,
    pub metrics: TweetMetrics,
    pub url: String,
}

/// The joined, numbered view of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub query: String,
    /// Always equal to `tweets.len()`
    pub count: usize,
    pub tweets: Vec<FormattedTweet>,
}

/// Builds the permalink of a tweet.
pub fn tweet_url(username: &str, tweet_id: &str) -> String {
    format!("https://{}/{}/status/{}", PERMALINK_HOST, username, tweet_id)
}

pub fn format_tweet(tweet: &Tweet, user: &TwitterUser, position: usize) -> FormattedTweet {
    FormattedTweet {
        position,
        author: FormattedAuthor {
            username: user.username.clone(),
        },
        content: tweet.text.clone(),
        metrics: tweet.metrics,
        url: tweet_url(&user.username, &tweet.id),
    }
}

/// Joins tweets with their authors.
///
/// Tweets whose author is not among `users` are dropped and do not take a
/// position; the remaining tweets keep their input order and are numbered
/// from 1. If several users share an id, the last one wins.
pub fn build_report(query: &str, tweets: &[Tweet], users: &[TwitterUser]) -> SearchReport {
    let users_by_id: HashMap<&str, &TwitterUser> =
        users.iter().map(|user| (user.id.as_str(), user)).collect();

    let formatted: Vec<FormattedTweet> = tweets
        .iter()
        .filter_map(|tweet| {
            users_by_id
                .get(tweet.author_id.as_str())
                .map(|user| (tweet, *user))
        })
        .enumerate()
        .map(|(index, (tweet, user))| format_tweet(tweet, user, index + 1))
        .collect();

    SearchReport {
        query: query.to_string(),
        count: formatted.len(),
        tweets: formatted,
    }
}

fn render_tweet(tweet: &FormattedTweet) -> String {
    [
        format!("Tweet #{}", tweet.position),
        format!("From: @{}", tweet.author.username),
        format!("Content: {}", tweet.content),
        format!(
            "Metrics: {} likes, {} retweets",
            tweet.metrics.likes, tweet.metrics.retweets
        ),
        format!("URL: {}", tweet.url),
        "=".to_string(),
    ]
    .join("\n")
}

/// Renders a report as text.
///
/// The layout is fixed: a four-line header, then either a single "no results"
/// line directly below it, or one block per tweet separated by blank lines.
pub fn render_report(report: &SearchReport) -> String {
    let header = [
        REPORT_TITLE.to_string(),
        format!("クエリ: \"{}\"", report.query),
        format!("取得数: {} ", report.count),
        "=".to_string(),
    ]
    .join("\n");

    if report.count == 0 {
        return format!("{}\n{}", header, NO_RESULTS_LINE);
    }

    std::iter::once(header)
        .chain(report.tweets.iter().map(render_tweet))
        .collect::<Vec<_>>()
        .join("\n\n")
}
