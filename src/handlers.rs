//! HTTP route handlers for the xreport service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests and return appropriate responses.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::XApiError;
use crate::formatter::{build_report, render_report};
use crate::twitter::TwitterClient;

/// Error code for requests that could not be parsed.
pub const INVALID_REQUEST_CODE: &str = "invalid_request";

/// Number of results requested when `/search` gets no `count`.
pub const DEFAULT_SEARCH_COUNT: u32 = 10;

/// Shared application state.
pub type AppState = Arc<TwitterClient>;

/// Body of `POST /tweet`.
#[derive(Debug, Deserialize)]
pub struct TweetRequest {
    pub text: String,
}

/// Output format of `GET /search`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn default_count() -> u32 {
    DEFAULT_SEARCH_COUNT
}

/// Query string of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Builds the router with all routes bound to `client`.
pub fn build_router(client: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/tweet", post(handle_tweet))
        .route("/search", get(handle_search))
        .with_state(client)
}

/// Maps a client error to an HTTP status and JSON body.
///
/// Upstream failures without a status are reported as 502 Bad Gateway.
pub fn error_response(err: &XApiError) -> (StatusCode, Json<Value>) {
    let status = err
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    (
        status,
        Json(json!({"status": "error", "message": err.message(), "code": err.code()})),
    )
}

/// Maps an extractor rejection to the error body, keeping its status.
fn rejection_response(status: StatusCode, message: String) -> (StatusCode, Json<Value>) {
    error!("Rejected request ({}): {}", status, message);
    (
        status,
        Json(json!({"status": "error", "message": message, "code": INVALID_REQUEST_CODE})),
    )
}

/// Handles GET requests to the `/health` endpoint.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "xreport"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "xreport"}))
}

/// Handles POST requests to the `/tweet` endpoint.
///
/// # Success Response
///
/// ```json
/// {
///   "status": "success",
///   "id": "<tweet id>",
///   "text": "<tweet text>"
/// }
/// ```
///
/// # Error Response
///
/// A body that cannot be parsed keeps axum's status and uses the code
/// `invalid_request`.
///
/// ```json
/// {
///   "status": "error",
///   "message": "<message>",
///   "code": "<code>"
/// }
/// ```
pub async fn handle_tweet(
    State(client): State<AppState>,
    request: Result<Json<TweetRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Json(request) =
        request.map_err(|rejection| rejection_response(rejection.status(), rejection.body_text()))?;

    match client.post_tweet(&request.text).await {
        Ok(tweet) => {
            info!("Tweet {} posted", tweet.id);
            Ok(Json(
                json!({"status": "success", "id": tweet.id, "text": tweet.text}),
            ))
        }
        Err(e) => {
            error!("Failed to post tweet: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Handles GET requests to the `/search` endpoint.
///
/// Returns the rendered text report by default, or the report as JSON when
/// `format=json` is given.
pub async fn handle_search(
    State(client): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let Query(params) =
        params.map_err(|rejection| rejection_response(rejection.status(), rejection.body_text()))?;

    let result = client
        .search_tweets(&params.query, params.count)
        .await
        .map_err(|e| {
            error!("Failed to search tweets: {}", e);
            error_response(&e)
        })?;

    let report = build_report(&params.query, &result.tweets, &result.users);
    info!(
        "Search report built with {} of {} tweets",
        report.count,
        result.tweets.len()
    );

    let response = match params.format {
        ReportFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_report(&report),
        )
            .into_response(),
        ReportFormat::Json => Json(report).into_response(),
    };
    Ok(response)
}
