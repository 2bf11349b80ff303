//! Onboarding handlers

use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::models::*;
use super::validators::{LoginValidator, SignupValidator};
use crate::common::{safe_email_log, ApiError, AppState, ErrorMap, Validator};
use crate::fields::FieldKind;

type SharedState = Extension<Arc<RwLock<AppState>>>;

fn log_failed_fields(form: &str, errors: &ErrorMap) {
    if !errors.is_valid() {
        let fields: Vec<&str> = errors.fields().collect();
        debug!(form, failed_fields = ?fields, "Form failed validation");
    }
}

/// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/onboarding/fields/:kind
/// Validates a single raw value against one field rule
///
/// # Request Body
/// ```json
/// { "value": "jane@example.com" }
/// ```
pub async fn validate_field(
    Extension(state_lock): SharedState,
    Path(kind): Path<String>,
    Json(payload): Json<FieldValueRequest>,
) -> Result<Json<FieldValidationResponse>, ApiError> {
    let kind: FieldKind = kind.parse()?;
    let today = state_lock.read().await.config.today();

    let result = kind.validate_on(&payload.value, today);
    debug!(field = %kind, valid = result.is_valid(), "Validated single field");

    Ok(Json(FieldValidationResponse {
        field: kind,
        valid: result.is_valid(),
        error: result.message().map(str::to_string),
    }))
}

/// POST /api/onboarding/signup/validate
/// Runs the full signup pass without submitting; always answers 200
pub async fn validate_signup(
    Extension(state_lock): SharedState,
    Json(request): Json<SignupRequest>,
) -> Json<FormValidationResponse> {
    let today = state_lock.read().await.config.today();
    let errors = SignupValidator::as_of(today).validate(&request);
    log_failed_fields("signup", &errors);

    Json(FormValidationResponse {
        valid: errors.is_valid(),
        errors,
    })
}

/// POST /api/onboarding/signup
/// Validates and accepts a signup form
///
/// # Response
/// - `201` with the accepted payload (never includes the password)
/// - `422` with `fields` mapping each failed field to its message
pub async fn submit_signup(
    Extension(state_lock): SharedState,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    info!(role = %request.role, "📝 Received signup submission");
    let today = state_lock.read().await.config.today();

    let errors = SignupValidator::as_of(today).validate(&request);
    if !errors.is_valid() {
        log_failed_fields("signup", &errors);
        return Err(errors.into());
    }

    let payload = SignupPayload::from_form(&request)?;
    info!(
        role = %payload.role(),
        email = %safe_email_log(&payload.account().email),
        "✅ Signup accepted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: format!("{} signup accepted", payload.role()),
            payload,
        }),
    ))
}

/// POST /api/onboarding/login/validate
/// Pre-submit checks for the login form; no credentials are verified
pub async fn validate_login(Json(request): Json<LoginRequest>) -> Json<FormValidationResponse> {
    let errors = LoginValidator.validate(&request);
    log_failed_fields("login", &errors);

    if errors.is_valid() {
        debug!(email = %safe_email_log(&request.email), "Login form passed validation");
    }

    Json(FormValidationResponse {
        valid: errors.is_valid(),
        errors,
    })
}
