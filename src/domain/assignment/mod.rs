//! Package-to-truck assignment engine.
//!
//! The engine is a pure function of its inputs: it receives the eligible
//! packages and the available trucks as slices, in retrieval order, and
//! returns an [`AssignmentPlan`]. It never touches storage; the caller
//! ([`crate::application::services::AssignmentService`]) reads the candidates
//! and commits the plan.
//!
//! # Strategies
//!
//! - [`Strategy::LengthFirstFitDecreasing`] - multi-truck, capacity is the
//!   truck's length ([`first_fit`])
//! - [`Strategy::VolumeBestFit`] - one truck per run, capacity is the truck's
//!   volume ([`best_fit`])
//!
//! Slice order is the only tie-breaker, so identical inputs always produce
//! identical plans.

pub mod best_fit;
pub mod first_fit;
pub mod plan;

pub use plan::{AssignmentPlan, Placement, PlanStatus};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{Package, Truck};

/// Default minimum utilization for [`Strategy::VolumeBestFit`].
pub const DEFAULT_MIN_UTILIZATION: f64 = 0.8;

/// Named assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    LengthFirstFitDecreasing,
    VolumeBestFit,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LengthFirstFitDecreasing => "length-first-fit-decreasing",
            Self::VolumeBestFit => "volume-best-fit",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown assignment strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length-first-fit-decreasing" | "length-first-fit" | "first-fit" => {
                Ok(Self::LengthFirstFitDecreasing)
            }
            "volume-best-fit" | "best-fit" => Ok(Self::VolumeBestFit),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Reasons an assignment run cannot produce a plan.
///
/// A package that fits nowhere is not an error; it lands in
/// [`AssignmentPlan::deferred`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("No package IDs provided")]
    EmptyRequest,

    #[error("No valid unassigned packages found")]
    NoEligiblePackages,

    #[error("No available trucks")]
    NoAvailableTrucks,
}

/// Strategy plus its tuning, applied to candidate snapshots.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentEngine {
    strategy: Strategy,
    min_utilization: f64,
}

impl AssignmentEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            min_utilization: DEFAULT_MIN_UTILIZATION,
        }
    }

    /// Overrides the utilization threshold used by [`Strategy::VolumeBestFit`].
    pub fn with_min_utilization(mut self, min_utilization: f64) -> Self {
        self.min_utilization = min_utilization;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn min_utilization(&self) -> f64 {
        self.min_utilization
    }

    /// Computes a plan for the given candidates.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NoEligiblePackages`] if `packages` is empty
    /// and [`AssignmentError::NoAvailableTrucks`] if `trucks` is empty.
    pub fn plan(
        &self,
        packages: &[Package],
        trucks: &[Truck],
    ) -> Result<AssignmentPlan, AssignmentError> {
        if packages.is_empty() {
            return Err(AssignmentError::NoEligiblePackages);
        }
        if trucks.is_empty() {
            return Err(AssignmentError::NoAvailableTrucks);
        }

        let plan = match self.strategy {
            Strategy::LengthFirstFitDecreasing => first_fit::plan(packages, trucks),
            Strategy::VolumeBestFit => best_fit::plan(packages, trucks, self.min_utilization),
        };

        Ok(plan)
    }
}

/// Indices of `packages` ordered by volume descending, ties in input order.
pub(crate) fn volume_descending(packages: &[Package]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..packages.len()).collect();
    order.sort_by(|&a, &b| packages[b].volume.total_cmp(&packages[a].volume));
    order
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;

    use crate::domain::dimensions::Dimensions;
    use crate::domain::entities::{Package, Truck};

    pub fn truck(id: &str, length: f64, width: f64, height: f64) -> Truck {
        let dims = Dimensions::new(length, width, height).unwrap();
        Truck::new(id.to_string(), dims, true, Utc::now())
    }

    pub fn package(id: &str, length: f64, width: f64, height: f64) -> Package {
        let dims = Dimensions::new(length, width, height).unwrap();
        Package::new(id.to_string(), dims, None, Utc::now())
    }
}
