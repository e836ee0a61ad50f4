use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jiff::Timestamp;

use crate::error::ApiError;
use crate::rate_limit::RateDecision;
use crate::state::AppState;

pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Per-client fixed-window limiter for the scoring endpoints.
pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client = client_id(&req);
    let limit = state.rate_limit;
    let now = Timestamp::now();
    let decision = state
        .rate_limiter
        .allow_at(&client, limit.max_requests, limit.window_millis, now);

    let mut response = if decision.allowed {
        next.run(req).await
    } else {
        tracing::warn!(client = %client, reset_at = %decision.reset_at, "rate limit exceeded");
        ApiError::TooManyRequests {
            retry_after_secs: retry_after_secs(decision.reset_at, now),
        }
        .into_response()
    };

    insert_headers(response.headers_mut(), limit.max_requests, &decision);
    response
}

/// First `x-forwarded-for` entry, else the peer address, else `"unknown"`.
pub fn client_id(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        && !forwarded.is_empty()
    {
        return forwarded.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn insert_headers(headers: &mut HeaderMap, limit: u32, decision: &RateDecision) {
    headers.insert(LIMIT_HEADER, HeaderValue::from(limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(decision.remaining));
    headers.insert(
        RESET_HEADER,
        HeaderValue::from(decision.reset_at.as_second()),
    );
}

/// Whole seconds until the window resets, rounded up and never below 1.
fn retry_after_secs(reset_at: Timestamp, now: Timestamp) -> u64 {
    let millis = reset_at.duration_since(now).as_millis().max(0);
    u64::try_from((millis + 999) / 1000).unwrap_or(u64::MAX).max(1)
}
