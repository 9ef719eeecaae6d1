//! Assignment plan produced by one engine run.

use serde::Serialize;

use super::Strategy;

/// A single package placed onto a truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub package_id: String,
    pub truck_id: String,
}

/// Outcome status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Assigned,
    Deferred,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Deferred => "deferred",
        }
    }
}

/// Placements, deferrals and consumed trucks of one run.
///
/// `placed.len() + deferred.len()` always equals the number of eligible
/// packages handed to the engine. `used_trucks` lists every truck that
/// received at least one package, in retrieval order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPlan {
    pub strategy: Strategy,
    pub placed: Vec<Placement>,
    pub deferred: Vec<String>,
    pub used_trucks: Vec<String>,
}

impl AssignmentPlan {
    pub(crate) fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            placed: Vec::new(),
            deferred: Vec::new(),
            used_trucks: Vec::new(),
        }
    }

    /// `Assigned` when at least one package was placed.
    pub fn status(&self) -> PlanStatus {
        if self.placed.is_empty() {
            PlanStatus::Deferred
        } else {
            PlanStatus::Assigned
        }
    }

    /// Returns true if nothing needs to be written back to the store.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// The single truck used by this run, if exactly one was used.
    pub fn single_truck(&self) -> Option<&str> {
        match self.used_trucks.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    pub fn placed_package_ids(&self) -> Vec<String> {
        self.placed.iter().map(|p| p.package_id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_is_deferred() {
        let plan = AssignmentPlan::new(Strategy::VolumeBestFit);

        assert_eq!(plan.status(), PlanStatus::Deferred);
        assert!(plan.is_empty());
        assert!(plan.single_truck().is_none());
    }

    #[test]
    fn test_single_truck() {
        let mut plan = AssignmentPlan::new(Strategy::LengthFirstFitDecreasing);
        plan.placed.push(Placement {
            package_id: "p1".to_string(),
            truck_id: "t1".to_string(),
        });
        plan.used_trucks.push("t1".to_string());

        assert_eq!(plan.status(), PlanStatus::Assigned);
        assert_eq!(plan.single_truck(), Some("t1"));
        assert_eq!(plan.placed_package_ids(), vec!["p1".to_string()]);

        plan.used_trucks.push("t2".to_string());
        assert!(plan.single_truck().is_none());
    }
}
