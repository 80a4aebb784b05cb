//! # xreport
//!
//! A Rust web service that posts and searches tweets via the Twitter/X API v2
//! using OAuth 1.0a User Context authentication.
//!
//! ## Environment Variables
//!
//! - `xapi_api_key`, `xapi_api_secret`, `xapi_access_token`, `xapi_access_token_secret`:
//!   Twitter API credentials
//! - `xapi_base_url`: Optional API base URL override
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## API Endpoints
//!
//! - `GET /health`: Returns service health status
//! - `POST /tweet`: Posts a tweet to Twitter/X
//! - `GET /search`: Returns a search report

use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use xreport::{build_router, get_server_port, TwitterClient, TwitterConfig};

/// Main entry point for the xreport web service.
///
/// Initializes logging, loads the credentials, builds the client and serves
/// the HTTP routes until Ctrl-C is received.
///
/// # Logging
///
/// Log levels can be controlled via the `RUST_LOG` environment variable.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// ```
///
/// # Panics
///
/// This function will panic if `PORT` is not a valid port number.
#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    let config = match TwitterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load Twitter configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = Arc::new(TwitterClient::new(config));

    let app = build_router(client).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting xreport server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("HTTP server error: {}", e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
