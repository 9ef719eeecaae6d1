//! Assignment run orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::assignment::{AssignmentEngine, AssignmentError, AssignmentPlan, Strategy};
use crate::domain::repositories::{AssignmentRepository, PackageRepository, TruckRepository};
use crate::error::AppError;

/// Runs the assignment engine against the record store.
///
/// One run reads the eligible packages and the available trucks, asks the
/// engine for a plan and commits it atomically. Runs are serialized by an
/// internal lock held from the first read to the commit, so two runs in this
/// process never plan against the same snapshot. Cross-process races are
/// caught by the guarded commit of the [`AssignmentRepository`].
pub struct AssignmentService {
    package_repository: Arc<dyn PackageRepository>,
    truck_repository: Arc<dyn TruckRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    engine: AssignmentEngine,
    run_lock: Mutex<()>,
}

impl AssignmentService {
    /// Creates a new assignment service using `engine` as the default.
    pub fn new(
        package_repository: Arc<dyn PackageRepository>,
        truck_repository: Arc<dyn TruckRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        engine: AssignmentEngine,
    ) -> Self {
        Self {
            package_repository,
            truck_repository,
            assignment_repository,
            engine,
            run_lock: Mutex::new(()),
        }
    }

    pub fn default_strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    /// Assigns the requested packages to available trucks.
    ///
    /// Duplicate ids count once. Ids that are unknown or already assigned are
    /// dropped. `strategy` overrides the configured default for this run.
    ///
    /// Nothing is written when the plan places no package.
    ///
    /// # Errors
    ///
    /// - [`AssignmentError::EmptyRequest`] (400) if `package_ids` is empty
    /// - [`AssignmentError::NoEligiblePackages`] (404) if no id resolves to an
    ///   unassigned package
    /// - [`AssignmentError::NoAvailableTrucks`] (404) if no truck is available
    /// - [`AppError::Conflict`] if the commit lost a race
    /// - [`AppError::Internal`] on storage errors
    pub async fn assign(
        &self,
        package_ids: &[String],
        strategy: Option<Strategy>,
    ) -> Result<AssignmentPlan, AppError> {
        let requested = dedup_ids(package_ids);
        if requested.is_empty() {
            return Err(AssignmentError::EmptyRequest.into());
        }

        let engine = match strategy {
            Some(strategy) => AssignmentEngine::new(strategy)
                .with_min_utilization(self.engine.min_utilization()),
            None => self.engine,
        };

        let _guard = self.run_lock.lock().await;

        let packages = self.package_repository.find_unassigned(&requested).await?;
        if packages.is_empty() {
            tracing::debug!(requested = requested.len(), "No eligible packages");
            return Err(AssignmentError::NoEligiblePackages.into());
        }

        let trucks = self.truck_repository.list_available().await?;
        let plan = engine.plan(&packages, &trucks)?;

        if !plan.is_empty() {
            self.assignment_repository
                .commit(&plan.placed, &plan.used_trucks)
                .await?;
        }

        let strategy = engine.strategy();
        metrics::counter!(
            "assignment_runs_total",
            "strategy" => strategy.as_str(),
            "status" => plan.status().as_str()
        )
        .increment(1);
        metrics::counter!("packages_placed_total").increment(plan.placed.len() as u64);
        metrics::counter!("packages_deferred_total").increment(plan.deferred.len() as u64);

        tracing::info!(
            strategy = %strategy,
            status = plan.status().as_str(),
            eligible = packages.len(),
            placed = plan.placed.len(),
            deferred = plan.deferred.len(),
            trucks = ?plan.used_trucks,
            "Assignment run finished"
        );

        Ok(plan)
    }
}

/// Drops duplicates, keeping the first occurrence.
fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dimensions::Dimensions;
    use crate::domain::entities::{Package, Truck};
    use crate::domain::repositories::{
        MockAssignmentRepository, MockPackageRepository, MockTruckRepository,
    };
    use chrono::Utc;
    use serde_json::json;

    fn truck(id: &str, length: f64, width: f64, height: f64) -> Truck {
        let dims = Dimensions::new(length, width, height).unwrap();
        Truck::new(id.to_string(), dims, true, Utc::now())
    }

    fn package(id: &str, length: f64, width: f64, height: f64) -> Package {
        let dims = Dimensions::new(length, width, height).unwrap();
        Package::new(id.to_string(), dims, None, Utc::now())
    }

    fn service(
        packages: MockPackageRepository,
        trucks: MockTruckRepository,
        assignments: MockAssignmentRepository,
        strategy: Strategy,
    ) -> AssignmentService {
        AssignmentService::new(
            Arc::new(packages),
            Arc::new(trucks),
            Arc::new(assignments),
            AssignmentEngine::new(strategy),
        )
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_request() {
        let mut packages = MockPackageRepository::new();
        packages.expect_find_unassigned().times(0);

        let service = service(
            packages,
            MockTruckRepository::new(),
            MockAssignmentRepository::new(),
            Strategy::LengthFirstFitDecreasing,
        );

        let err = service.assign(&[], None).await.unwrap_err();
        assert_eq!(err.code(), "empty_request");
    }

    #[tokio::test]
    async fn test_no_eligible_packages() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut trucks = MockTruckRepository::new();
        trucks.expect_list_available().times(0);

        let service = service(
            packages,
            trucks,
            MockAssignmentRepository::new(),
            Strategy::LengthFirstFitDecreasing,
        );

        let err = service.assign(&ids(&["gone"]), None).await.unwrap_err();
        assert_eq!(err.code(), "no_eligible_packages");
    }

    #[tokio::test]
    async fn test_no_available_trucks() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .times(1)
            .returning(|_| Ok(vec![package("p1", 1.0, 1.0, 1.0)]));

        let mut trucks = MockTruckRepository::new();
        trucks
            .expect_list_available()
            .times(1)
            .returning(|| Ok(vec![]));

        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_commit().times(0);

        let service = service(packages, trucks, assignments, Strategy::VolumeBestFit);

        let err = service.assign(&ids(&["p1"]), None).await.unwrap_err();
        assert_eq!(err.code(), "no_available_trucks");
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_requested_once() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .withf(|requested| requested.len() == 2 && requested[0] == "a" && requested[1] == "b")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = service(
            packages,
            MockTruckRepository::new(),
            MockAssignmentRepository::new(),
            Strategy::LengthFirstFitDecreasing,
        );

        let result = service.assign(&ids(&["a", "b", "a"]), None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_commits_placements_and_used_trucks() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .times(1)
            .returning(|_| Ok(vec![package("p1", 5.0, 1.0, 1.0)]));

        let mut trucks = MockTruckRepository::new();
        trucks
            .expect_list_available()
            .times(1)
            .returning(|| Ok(vec![truck("t1", 10.0, 2.0, 2.0), truck("t2", 10.0, 2.0, 2.0)]));

        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_commit()
            .withf(|placements, used| {
                placements.len() == 1
                    && placements[0].package_id == "p1"
                    && placements[0].truck_id == "t1"
                    && used.len() == 1
                    && used[0] == "t1"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(
            packages,
            trucks,
            assignments,
            Strategy::LengthFirstFitDecreasing,
        );

        let plan = service.assign(&ids(&["p1"]), None).await.unwrap();
        assert_eq!(plan.single_truck(), Some("t1"));
        assert!(plan.deferred.is_empty());
    }

    #[tokio::test]
    async fn test_fully_deferred_run_writes_nothing() {
        let mut packages = MockPackageRepository::new();
        packages.expect_find_unassigned().times(1).returning(|_| {
            Ok(vec![
                package("p30", 30.0, 1.0, 1.0),
                package("p90", 90.0, 1.0, 1.0),
            ])
        });

        let mut trucks = MockTruckRepository::new();
        trucks
            .expect_list_available()
            .times(1)
            .returning(|| Ok(vec![truck("t1", 10.0, 10.0, 1.0)]));

        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_commit().times(0);

        let service = service(packages, trucks, assignments, Strategy::VolumeBestFit);

        let plan = service.assign(&ids(&["p30", "p90"]), None).await.unwrap();
        assert_eq!(plan.deferred.len(), 2);
        assert!(plan.used_trucks.is_empty());
    }

    #[tokio::test]
    async fn test_strategy_override() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .times(1)
            .returning(|_| Ok(vec![package("p1", 9.0, 10.0, 1.0)]));

        let mut trucks = MockTruckRepository::new();
        trucks
            .expect_list_available()
            .times(1)
            .returning(|| Ok(vec![truck("t1", 10.0, 10.0, 1.0)]));

        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_commit()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(
            packages,
            trucks,
            assignments,
            Strategy::LengthFirstFitDecreasing,
        );
        assert_eq!(service.default_strategy(), Strategy::LengthFirstFitDecreasing);

        let plan = service
            .assign(&ids(&["p1"]), Some(Strategy::VolumeBestFit))
            .await
            .unwrap();
        assert_eq!(plan.strategy, Strategy::VolumeBestFit);
    }

    #[tokio::test]
    async fn test_commit_conflict_propagates() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_unassigned()
            .times(1)
            .returning(|_| Ok(vec![package("p1", 1.0, 1.0, 1.0)]));

        let mut trucks = MockTruckRepository::new();
        trucks
            .expect_list_available()
            .times(1)
            .returning(|| Ok(vec![truck("t1", 10.0, 2.0, 2.0)]));

        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_commit()
            .times(1)
            .returning(|_, _| Err(AppError::conflict("Truck is no longer available", json!({}))));

        let service = service(
            packages,
            trucks,
            assignments,
            Strategy::LengthFirstFitDecreasing,
        );

        let result = service.assign(&ids(&["p1"]), None).await;
        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[test]
    fn test_dedup_ids_keeps_first_occurrence() {
        assert_eq!(dedup_ids(&ids(&["b", "a", "b", "c", "a"])), ids(&["b", "a", "c"]));
    }
}
