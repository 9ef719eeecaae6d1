//! DTOs for the assignment endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::assignment::{AssignmentPlan, Placement, PlanStatus, Strategy};

/// Request to assign packages to trucks.
///
/// A missing `package_ids` field is treated as an empty list. At most 1000
/// ids are accepted per request.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignRequest {
    #[serde(default)]
    #[validate(length(max = 1000, message = "Too many package ids in one request"))]
    pub package_ids: Vec<String>,

    /// Optional override of the configured strategy.
    pub strategy: Option<Strategy>,
}

/// Outcome of an assignment run.
#[derive(Debug, Serialize)]
pub struct AssignResponse {
    pub status: PlanStatus,
    pub strategy: Strategy,
    pub assigned_packages: Vec<String>,
    pub deferred_packages: Vec<String>,
    pub placements: Vec<Placement>,
    pub truck_ids: Vec<String>,

    /// Present when exactly one truck was loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<String>,
}

impl From<AssignmentPlan> for AssignResponse {
    fn from(plan: AssignmentPlan) -> Self {
        Self {
            status: plan.status(),
            strategy: plan.strategy,
            assigned_packages: plan.placed_package_ids(),
            truck_id: plan.single_truck().map(str::to_string),
            deferred_packages: plan.deferred,
            placements: plan.placed,
            truck_ids: plan.used_trucks,
        }
    }
}
