//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (database)
//!
//! # Legacy
//! ANY  /booking                         - 307 to /quotation
//!
//! # JSON API
//! GET  /api/packages                    - All tour packages
//! GET  /api/quotations/{number}/images  - Vehicle images of one quotation
//! ```

pub mod api;
pub mod health;
pub mod redirect;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(api::packages::index))
        .route(
            "/quotations/{number}/images",
            get(api::quotations::images),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route(redirect::LEGACY_BOOKING_PATH, any(redirect::legacy_booking))
        .nest("/api", api_routes())
}

/// Build the complete application with middleware and state applied.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::locale_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
