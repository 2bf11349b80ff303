// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::to_bytes;
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::debug;

use crate::common::redact_secrets;

/// Largest body the middleware will buffer for logging
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Renders a body for the log line; JSON is pretty-printed with passwords masked
fn render_body(bytes: &[u8]) -> Option<String> {
    let body_str = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(mut json) => {
            redact_secrets(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| "<unprintable>".to_string()))
        }
        Err(_) => Some(body_str.to_string()),
    }
}

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    // Read request body
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    if let Some(request_body) = render_body(&bytes).filter(|b| !b.is_empty()) {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %request_body,
            "📥 Request"
        );
    }

    // Reconstruct request
    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(response_body) = render_body(&bytes).filter(|b| !b.is_empty()) {
        debug!(
            status = %parts.status,
            response_body = %response_body,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
