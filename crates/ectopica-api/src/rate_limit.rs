//! Fixed-window request limiter keyed by client identity.
//!
//! Windows are not sliding: a client can send up to twice the limit across a
//! window boundary. Expired windows are reset lazily on the client's next
//! request and purged in bulk once the map grows large, at most once per
//! window.

use std::collections::HashMap;
use std::sync::Mutex;

use jiff::{SignedDuration, Timestamp};

const PURGE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at: Timestamp,
}

#[derive(Debug, Clone, Copy)]
struct RateWindow {
    count: u32,
    reset_at: Timestamp,
}

impl RateWindow {
    fn start(now: Timestamp, window: SignedDuration) -> Self {
        Self {
            count: 1,
            reset_at: now.checked_add(window).unwrap_or(Timestamp::MAX),
        }
    }
}

#[derive(Debug, Default)]
struct LimiterState {
    clients: HashMap<String, RateWindow>,
    last_purge: Option<Timestamp>,
}

impl LimiterState {
    fn purge_expired(&mut self, now: Timestamp, window: SignedDuration) {
        if self.clients.len() < PURGE_THRESHOLD
            || self
                .last_purge
                .is_some_and(|at| now.duration_since(at) < window)
        {
            return;
        }
        self.clients.retain(|_, w| now <= w.reset_at);
        self.last_purge = Some(now);
    }
}

/// Owned by the application state and shared across request handlers.
#[derive(Debug, Default)]
pub struct RateLimiter {
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(&self, client_id: &str, max_requests: u32, window_millis: u64) -> RateDecision {
        self.allow_at(client_id, max_requests, window_millis, Timestamp::now())
    }

    /// Count one request from `client_id` at `now`.
    ///
    /// The increment and the comparison happen under one lock, so concurrent
    /// requests from the same client never lose a count.
    pub fn allow_at(
        &self,
        client_id: &str,
        max_requests: u32,
        window_millis: u64,
        now: Timestamp,
    ) -> RateDecision {
        let window_len =
            SignedDuration::from_millis(i64::try_from(window_millis).unwrap_or(i64::MAX));
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        state.purge_expired(now, window_len);

        let window = state
            .clients
            .entry(client_id.to_string())
            .and_modify(|w| {
                if now > w.reset_at {
                    *w = RateWindow::start(now, window_len);
                } else {
                    w.count = w.count.saturating_add(1);
                }
            })
            .or_insert_with(|| RateWindow::start(now, window_len));

        RateDecision {
            allowed: window.count <= max_requests,
            remaining: max_requests.saturating_sub(window.count),
            reset_at: window.reset_at,
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clients
            .len()
    }
}
