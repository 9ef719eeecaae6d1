//! Handlers for package endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::package::{PackageCreatedResponse, PackageItem};
use crate::domain::dimensions::Dimensions;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new package.
///
/// # Endpoint
///
/// `POST /add-package`
///
/// Same body and validation rules as `POST /add-truck`.
///
/// # Response
///
/// ```json
/// { "status": "created", "package_id": "0b7e..." }
/// ```
pub async fn create_package_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<PackageCreatedResponse>), AppError> {
    let dimensions = Dimensions::parse(
        payload.get("length"),
        payload.get("width"),
        payload.get("height"),
    )?;

    let package = state.package_service.create_package(dimensions).await?;

    Ok((
        StatusCode::CREATED,
        Json(PackageCreatedResponse {
            status: "created",
            package_id: package.id,
        }),
    ))
}

/// Returns a single package with its truck assignment.
///
/// # Endpoint
///
/// `GET /packages/{id}`
///
/// # Errors
///
/// Returns 404 if the package does not exist.
pub async fn get_package_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PackageItem>, AppError> {
    let package = state.package_service.get_package(&id).await?;
    Ok(Json(package.into()))
}
