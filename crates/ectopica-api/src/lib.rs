//! ectopica-api
//!
//! HTTP surface for the risk engine, safety gates and case lifecycle.
//! Runs as a plain Tokio server or inside AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Endpoints that run the scoring engine are rate limited per client.
    let limited = Router::new()
        .route("/score", post(routes::scoring::score))
        .route(
            "/cases/{folio}/consultations",
            post(routes::cases::submit_consultation),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::enforce,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/gates/vital-signs", post(routes::gates::vital_signs))
        .route("/gates/pregnancy-test", post(routes::gates::pregnancy_test))
        .route("/gates/ultrasound", post(routes::gates::ultrasound))
        .route("/cases", get(routes::cases::list_cases))
        .route("/cases/{folio}", get(routes::cases::get_case))
        .route("/cases/{folio}/close", post(routes::cases::close_case))
        .merge(limited)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
