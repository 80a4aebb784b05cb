//! Twitter Search Report Script
//!
//! Searches recent tweets and prints the text report.
//!
//! ```bash
//! search_tweets "rust lang" 20
//! ```

use xreport::{build_report, render_report, TwitterClient, TwitterConfig};

const DEFAULT_COUNT: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let query = match args.next() {
        Some(query) if !query.trim().is_empty() => query,
        _ => {
            eprintln!("Usage: search_tweets <query> [count]");
            return Err("A search query is required".into());
        }
    };
    let count = match args.next() {
        Some(count) => count
            .parse::<u32>()
            .map_err(|e| format!("Invalid count '{}': {}", count, e))?,
        None => DEFAULT_COUNT,
    };

    let client = TwitterClient::new(TwitterConfig::from_env()?);
    let result = client.search_tweets(&query, count).await?;

    let report = build_report(&query, &result.tweets, &result.users);
    println!("{}", render_report(&report));

    Ok(())
}
