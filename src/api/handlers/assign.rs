//! Handler for the assignment endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::assignment::{AssignRequest, AssignResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Assigns packages to available trucks.
///
/// # Endpoint
///
/// `POST /assign-truck`
///
/// # Request Body
///
/// ```json
/// {
///   "package_ids": ["0b7e...", "91ad..."],
///   "strategy": "volume-best-fit"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "assigned",
///   "strategy": "length-first-fit-decreasing",
///   "assigned_packages": ["0b7e..."],
///   "deferred_packages": ["91ad..."],
///   "placements": [{ "package_id": "0b7e...", "truck_id": "6f1c..." }],
///   "truck_ids": ["6f1c..."],
///   "truck_id": "6f1c..."
/// }
/// ```
///
/// Packages that fit on no truck are listed in `deferred_packages`; that is
/// still a 200 response.
///
/// # Errors
///
/// - 400 `empty_request` if `package_ids` is empty or missing
/// - 404 `no_eligible_packages` if none of the ids is an unassigned package
/// - 404 `no_available_trucks` if every truck is taken
/// - 409 `conflict` if a concurrent run claimed the same truck or package
pub async fn assign_handler(
    State(state): State<AppState>,
    Json(payload): Json<AssignRequest>,
) -> Result<Json<AssignResponse>, AppError> {
    payload.validate()?;

    let plan = state
        .assignment_service
        .assign(&payload.package_ids, payload.strategy)
        .await?;

    Ok(Json(plan.into()))
}
