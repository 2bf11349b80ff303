//! Onboarding routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the onboarding router
///
/// # Routes
/// - `GET /api/health` - Liveness check
/// - `POST /api/onboarding/fields/:kind` - Validate one value against a field rule
/// - `POST /api/onboarding/signup/validate` - Live signup validation
/// - `POST /api/onboarding/signup` - Validate and accept a signup
/// - `POST /api/onboarding/login/validate` - Login form checks
pub fn onboarding_routes() -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/onboarding/fields/:kind", post(handlers::validate_field))
        .route(
            "/api/onboarding/signup/validate",
            post(handlers::validate_signup),
        )
        .route("/api/onboarding/signup", post(handlers::submit_signup))
        .route(
            "/api/onboarding/login/validate",
            post(handlers::validate_login),
        )
}
