//! Error types for the Twitter/X client.
//!
//! Every failure surfaced by [`crate::twitter::TwitterClient`] is an [`XApiError`].
//! Lower layers (the HTTP binding, JSON decoding) return the usual
//! `Box<dyn std::error::Error + Send + Sync>`; [`XApiError::from_boxed`] turns those
//! into one of the three variants below.

use log::error;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Message carried by a locally detected rate limit.
pub const RATE_LIMIT_MESSAGE: &str = "レート制限超過";

/// Reason carried by a locally detected rate limit.
pub const RATE_LIMIT_REASON: &str = "前回の呼び出しから1秒未満です";

/// Default message for upstream failures that arrive without one.
pub const DEFAULT_UPSTREAM_MESSAGE: &str = "Twitter API error";

/// Message returned to callers for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Code returned to callers for unexpected failures.
pub const INTERNAL_ERROR_CODE: &str = "internal_error";

/// A structured failure reported by the Twitter API itself.
///
/// The HTTP binding returns this (boxed) whenever the API answers with a
/// non-success status. It is the only error shape, besides [`XApiError`],
/// that [`XApiError::from_boxed`] recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamFailure {
    /// Human-readable message from the API (may be empty)
    pub message: String,
    /// API error code
    pub code: String,
    /// HTTP status of the failed response, when known
    pub status: Option<u16>,
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (code {}, status {})", self.message, self.code, status),
            None => write!(f, "{} (code {})", self.message, self.code),
        }
    }
}

impl Error for UpstreamFailure {}

/// Normalized error for every client operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XApiError {
    /// The same logical endpoint was called again within the cool-down window.
    #[error("レート制限超過: {reason}")]
    RateLimited { reason: String },

    /// The API reported a structured failure.
    #[error("{message} (code: {code})")]
    Upstream {
        message: String,
        code: String,
        status: Option<u16>,
    },

    /// Anything else. Details are logged, never returned.
    #[error("An unexpected error occurred")]
    Internal,
}

impl XApiError {
    pub(crate) fn rate_limited() -> Self {
        XApiError::RateLimited {
            reason: RATE_LIMIT_REASON.to_string(),
        }
    }

    /// Normalizes an arbitrary boxed error.
    ///
    /// - an `XApiError` is passed through unchanged
    /// - an [`UpstreamFailure`] becomes [`XApiError::Upstream`]
    /// - anything else is logged and replaced by [`XApiError::Internal`]
    pub fn from_boxed(err: Box<dyn Error + Send + Sync>) -> Self {
        let err = match err.downcast::<XApiError>() {
            Ok(api_error) => return *api_error,
            Err(other) => other,
        };

        match err.downcast::<UpstreamFailure>() {
            Ok(failure) => {
                let UpstreamFailure {
                    message,
                    code,
                    status,
                } = *failure;
                XApiError::Upstream {
                    message: if message.is_empty() {
                        DEFAULT_UPSTREAM_MESSAGE.to_string()
                    } else {
                        message
                    },
                    code,
                    status,
                }
            }
            Err(other) => {
                error!("Unexpected error in Twitter client: {:?}", other);
                XApiError::Internal
            }
        }
    }

    /// The caller-facing message.
    pub fn message(&self) -> &str {
        match self {
            XApiError::RateLimited { .. } => RATE_LIMIT_MESSAGE,
            XApiError::Upstream { message, .. } => message,
            XApiError::Internal => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// The error code. For rate limits this is the reason string.
    pub fn code(&self) -> &str {
        match self {
            XApiError::RateLimited { reason } => reason,
            XApiError::Upstream { code, .. } => code,
            XApiError::Internal => INTERNAL_ERROR_CODE,
        }
    }

    /// HTTP-like status. `None` only for upstream failures that carried none.
    pub fn status(&self) -> Option<u16> {
        match self {
            XApiError::RateLimited { .. } => Some(429),
            XApiError::Upstream { status, .. } => *status,
            XApiError::Internal => Some(500),
        }
    }
}
