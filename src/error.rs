//! HTTP-facing application error.
//!
//! Every failure that reaches a handler is an [`AppError`]. Domain errors
//! ([`DimensionError`], [`AssignmentError`]) and storage errors convert into
//! it with `?`, keeping their own machine-readable `code`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::assignment::AssignmentError;
use crate::domain::dimensions::DimensionError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload: `{"code", "message", "details"}`.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },
    NotFound {
        code: &'static str,
        message: String,
        details: Value,
    },
    Conflict {
        code: &'static str,
        message: String,
        details: Value,
    },
    Internal {
        code: &'static str,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            details,
        }
    }
    pub fn not_found(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            code: "conflict",
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Internal { code, .. } => *code,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details, .. }
            | AppError::NotFound { message, details, .. }
            | AppError::Conflict { message, details, .. }
            | AppError::Internal { message, details, .. } => (message, details),
        };

        ErrorInfo {
            code: self.code(),
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DimensionError> for AppError {
    fn from(e: DimensionError) -> Self {
        AppError::bad_request(
            "invalid_dimension",
            e.to_string(),
            json!({ "field": e.field() }),
        )
    }
}

impl From<AssignmentError> for AppError {
    fn from(e: AssignmentError) -> Self {
        match e {
            AssignmentError::EmptyRequest => {
                AppError::bad_request("empty_request", e.to_string(), json!({}))
            }
            AssignmentError::NoEligiblePackages => {
                AppError::not_found("no_eligible_packages", e.to_string(), json!({}))
            }
            AssignmentError::NoAvailableTrucks => {
                AppError::not_found("no_available_trucks", e.to_string(), json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("validation_error", "Invalid request", details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps storage failures to 409 (unique/foreign key) or 500, never to 400.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::conflict(
                "Foreign key violation",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
