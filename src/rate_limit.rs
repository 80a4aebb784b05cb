//! Local per-endpoint cool-down.
//!
//! This is a purely in-process gate keyed by logical endpoint name. It does not
//! reflect the platform's server-side limits.

use log::warn;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::XApiError;

/// Minimum time between two calls to the same logical endpoint.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Source of the current time for the gate.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Remembers the last accepted call per endpoint and rejects calls that come too soon.
pub struct RateGate {
    clock: Arc<dyn Clock>,
    last_calls: Mutex<HashMap<String, Instant>>,
}

impl RateGate {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_calls: Mutex::new(HashMap::new()),
        }
    }

    /// Checks the gate for `endpoint` and, if open, records this call.
    ///
    /// A rejected call does not move the recorded timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`XApiError::RateLimited`] if the previous accepted call to the
    /// same endpoint happened less than [`MIN_INTERVAL`] ago.
    pub fn check(&self, endpoint: &str) -> Result<(), XApiError> {
        let now = self.clock.now();

        // Check and record happen under one lock so concurrent callers cannot both pass.
        let mut last_calls = match self.last_calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(last) = last_calls.get(endpoint) {
            let elapsed = now.saturating_duration_since(*last);
            if elapsed < MIN_INTERVAL {
                warn!(
                    "Rate gate closed for '{}': {} ms since last call",
                    endpoint,
                    elapsed.as_millis()
                );
                return Err(XApiError::rate_limited());
            }
        }

        last_calls.insert(endpoint.to_string(), now);
        Ok(())
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new()
    }
}
