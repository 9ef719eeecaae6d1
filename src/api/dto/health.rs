//! DTOs for health check endpoint.

use serde::Serialize;

use crate::domain::assignment::Strategy;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Strategy applied when a request names none.
    pub default_strategy: Strategy,
    pub checks: HealthChecks,
}

/// Per-component results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
