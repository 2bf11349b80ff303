// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use std::{env, net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_onboarding::common::config::{apply_cli_overrides, print_config_status};
use storefront_onboarding::common::{AppConfig, AppState};
use storefront_onboarding::{logging_middleware, onboarding::onboarding_routes};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = apply_cli_overrides(AppConfig::from_env(), env::args().skip(1));
    print_config_status(&config);

    let origins: Vec<axum::http::HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    info!("Allowed CORS origins: {:?}", config.cors_origins);

    let port = config.port;
    let log_bodies = config.log_bodies;
    let shared = Arc::new(RwLock::new(AppState::new(config)));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let mut app = Router::new().merge(onboarding_routes());

    if log_bodies {
        app = app.layer(middleware::from_fn(logging_middleware::log_request_response));
    }

    let app = app
        .layer(Extension(shared))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::HeaderName::from_static("x-request-id"),
                ]),
        )
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
