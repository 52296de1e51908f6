//! Request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::BytesRejection},
    http::{StatusCode, Uri},
};
use tools_calculator::{CalculatorInputs, InputValue, catalog};
use tracing::{debug, info, warn};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::{HealthResponse, ToolsQuery, ToolsResponse};

/// `POST /api/{calculator}`
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(calculator): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.registry.contains(&calculator) {
        warn!(%calculator, "Unknown calculator requested");
        return Err(ApiError::not_found(format!("/api/{calculator}")));
    }

    let outcome = parse_inputs(body).and_then(|inputs| {
        debug!(%calculator, ?inputs, "Calculation requested");
        Ok(state.registry.calculate(&calculator, &inputs)?)
    });

    match outcome {
        Ok(result) => {
            info!(%calculator, "Calculation succeeded");
            Ok(Json(result))
        }
        Err(err) => {
            warn!(%calculator, error = %err, "Calculation rejected");
            Err(err)
        }
    }
}

fn parse_inputs(body: Result<Bytes, BytesRejection>) -> ApiResult<CalculatorInputs> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::invalid(rejection.body_text())
        }
    })?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::invalid("Empty request body"));
    }

    let json: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::invalid(format!("Invalid JSON body: {e}")))?;
    if !json.is_object() {
        return Err(ApiError::invalid("Request body must be a JSON object"));
    }

    InputValue::map_from_json(&json)
        .map(CalculatorInputs::from)
        .map_err(|e| ApiError::invalid(format!("Invalid JSON body: {e}")))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.elapsed().as_secs(),
    })
}

/// `GET /api/tools`
pub async fn tools(Query(query): Query<ToolsQuery>) -> Json<ToolsResponse> {
    Json(ToolsResponse {
        categories: catalog::categories(),
        tools: catalog::search(query.q.as_deref(), query.category.as_deref()),
    })
}

/// Fallback for a known route hit with the wrong method.
pub async fn method_not_allowed(uri: Uri) -> ApiError {
    debug!(%uri, "Method not allowed");
    ApiError::MethodNotAllowed
}

/// Fallback for every unmatched route.
pub async fn not_found(uri: Uri) -> ApiError {
    debug!(%uri, "No route matched");
    ApiError::not_found(uri.path())
}
