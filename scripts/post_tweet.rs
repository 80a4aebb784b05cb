//! Twitter Tweet Posting Script
//!
//! This script posts a tweet to Twitter/X using the credentials from the
//! `xapi_*` environment variables and the message you type in.

use std::io::{self, Write};

use xreport::{TwitterClient, TwitterConfig};

/// Twitter's length limit for a single tweet, in characters.
const MAX_TWEET_CHARS: usize = 280;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🐦 Twitter Tweet Posting Tool");
    println!("==============================");

    let config = TwitterConfig::from_env()?;
    println!("🔑 Credentials loaded from environment");

    // Get tweet message from user
    print!("📝 Enter your tweet message: ");
    io::stdout().flush()?;
    let mut tweet_text = String::new();
    io::stdin().read_line(&mut tweet_text)?;
    let tweet_text = tweet_text.trim();

    if tweet_text.is_empty() {
        println!("❌ Tweet message cannot be empty!");
        return Err("Tweet message is required".into());
    }

    let length = tweet_text.chars().count();
    if length > MAX_TWEET_CHARS {
        println!(
            "⚠️  Tweet is {} characters (max {}), the API will likely reject it",
            length, MAX_TWEET_CHARS
        );
    } else {
        println!("📏 Tweet length: {} characters", length);
    }

    println!("\n🚀 Posting your tweet...");
    let client = TwitterClient::new(config);
    match client.post_tweet(tweet_text).await {
        Ok(tweet) => {
            println!("\n🎉 Success! Your tweet has been posted.");
            println!("🆔 ID: {}", tweet.id);
            println!("📄 Text: {}", tweet.text);
        }
        Err(e) => {
            println!("\n💥 Failed to post tweet: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
