//! Request and response payloads that are not calculator results.

use serde::{Deserialize, Serialize};
use tools_calculator::catalog::ToolInfo;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Whole seconds since the application state was created
    pub uptime_seconds: u64,
}

/// Query string of `GET /api/tools`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub categories: Vec<&'static str>,
    pub tools: Vec<&'static ToolInfo>,
}
