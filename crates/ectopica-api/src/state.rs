use std::sync::Arc;

use ectopica_cases::service::CaseService;
use ectopica_cases::store::AnyCaseStore;

use crate::config::RateLimitConfig;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub cases: Arc<CaseService<AnyCaseStore>>,
    pub rate_limiter: Arc<RateLimiter>,
    pub rate_limit: RateLimitConfig,
}

impl AppState {
    pub fn new(store: AnyCaseStore, rate_limit: RateLimitConfig) -> Self {
        Self {
            cases: Arc::new(CaseService::new(store)),
            rate_limiter: Arc::new(RateLimiter::new()),
            rate_limit,
        }
    }
}
