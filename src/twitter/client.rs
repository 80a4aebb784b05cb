//! The client adapter: rate gate plus error normalization around a [`TwitterApi`].

use log::info;

use crate::config::TwitterConfig;
use crate::rate_limit::RateGate;

use super::api::{HttpTwitterClient, TwitterApi};

/// Logical endpoint name used to gate tweet creation.
pub const CREATE_ENDPOINT: &str = "tweets/create";

/// Logical endpoint name used to gate searches.
pub const SEARCH_ENDPOINT: &str = "tweets/search";

/// Posts and searches tweets on behalf of one authenticated user.
///
/// Every operation first passes the local [`RateGate`], then makes exactly one
/// upstream call. Failures are always returned as [`crate::XApiError`].
pub struct TwitterClient {
    pub(super) api: Box<dyn TwitterApi>,
    pub(super) gate: RateGate,
}

impl TwitterClient {
    /// Creates a client that talks to the Twitter API over HTTPS.
    ///
    /// Credentials are not checked here; invalid values surface as an error
    /// from the first call.
    pub fn new(config: TwitterConfig) -> Self {
        Self::with_api(Box::new(HttpTwitterClient::new(config)), RateGate::new())
    }

    /// Creates a client over any [`TwitterApi`] implementation and rate gate.
    pub fn with_api(api: Box<dyn TwitterApi>, gate: RateGate) -> Self {
        info!("X API client initialized");
        Self { api, gate }
    }
}
