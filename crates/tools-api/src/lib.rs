//! India Tools HTTP API
//!
//! Exposes the calculators from `tools-calculator` as JSON endpoints:
//!
//! * `POST /api/{age|cgpa|gst|emi}`: run a calculator
//! * `GET /api/tools`: searchable tool catalog
//! * `GET /health`: liveness
//!
//! Every response carries `Access-Control-Allow-Origin: *`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tools_calculator::CalculatorRegistry;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod tracing_setup;
pub mod types;

use config::ToolsConfig;

/// Shared, read-only application state
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub registry: CalculatorRegistry,
}

impl AppState {
    pub fn new(registry: CalculatorRegistry) -> Self {
        Self { start_time: Utc::now(), registry }
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

/// Build the application with the built-in calculators.
pub fn create_app(config: &ToolsConfig) -> Router {
    create_app_with_registry(config, CalculatorRegistry::new())
}

/// Build the application around a specific registry.
pub fn create_app_with_registry(config: &ToolsConfig, registry: CalculatorRegistry) -> Router {
    info!(calculators = ?registry.names(), "Initializing application state");
    let state = Arc::new(AppState::new(registry));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health).fallback(handlers::method_not_allowed))
        .route("/api/tools", get(handlers::tools).fallback(handlers::method_not_allowed))
        .route(
            "/api/{calculator}",
            post(handlers::calculate).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
