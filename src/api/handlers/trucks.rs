//! Handlers for truck endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::truck::{TruckCreatedResponse, TruckItem, TruckListParams, TruckListResponse};
use crate::domain::dimensions::Dimensions;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new truck.
///
/// # Endpoint
///
/// `POST /add-truck`
///
/// # Request Body
///
/// ```json
/// { "length": 10, "width": 2, "height": 2 }
/// ```
///
/// Numeric strings such as `"2.5"` are accepted.
///
/// # Response
///
/// ```json
/// { "status": "created", "truck_id": "6f1c..." }
/// ```
///
/// # Errors
///
/// Returns 400 (`invalid_dimension`) if a dimension is missing, non-numeric
/// or not positive. Nothing is stored in that case.
pub async fn create_truck_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<TruckCreatedResponse>), AppError> {
    let dimensions = Dimensions::parse(
        payload.get("length"),
        payload.get("width"),
        payload.get("height"),
    )?;

    let truck = state.truck_service.create_truck(dimensions).await?;

    Ok((
        StatusCode::CREATED,
        Json(TruckCreatedResponse {
            status: "created",
            truck_id: truck.id,
        }),
    ))
}

/// Lists trucks in retrieval order.
///
/// # Endpoint
///
/// `GET /trucks?available=true`
pub async fn truck_list_handler(
    State(state): State<AppState>,
    Query(params): Query<TruckListParams>,
) -> Result<Json<TruckListResponse>, AppError> {
    let trucks = state
        .truck_service
        .list_trucks(params.available.unwrap_or(false))
        .await?;

    Ok(Json(TruckListResponse {
        items: trucks.into_iter().map(TruckItem::from).collect(),
    }))
}

/// Returns a single truck.
///
/// # Endpoint
///
/// `GET /trucks/{id}`
///
/// # Errors
///
/// Returns 404 if the truck does not exist.
pub async fn get_truck_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TruckItem>, AppError> {
    let truck = state.truck_service.get_truck(&id).await?;
    Ok(Json(truck.into()))
}
