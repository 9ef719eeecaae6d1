//! Aggregate-volume Best-Fit onto a single truck.
//!
//! The run targets one truck: the available truck whose volume is closest to
//! the combined volume of all eligible packages and that passes the
//! utilization threshold. Packages are then loaded largest first while the
//! running volume stays within the truck's volume.
//!
//! A truck is accepted when `total / truck.volume >= min_utilization` and
//! `total <= truck.volume`: it neither wastes more than the allowed share of
//! space nor is too small for the whole batch.

use super::{AssignmentPlan, Placement, Strategy, volume_descending};
use crate::domain::entities::{Package, Truck};

pub fn plan(packages: &[Package], trucks: &[Truck], min_utilization: f64) -> AssignmentPlan {
    // Summed in fill order so an accepted truck holds the whole batch.
    let order = volume_descending(packages);
    let total_volume: f64 = order.iter().map(|&idx| packages[idx].volume).sum();
    let mut plan = AssignmentPlan::new(Strategy::VolumeBestFit);

    let Some(target) = select_truck(trucks, total_volume, min_utilization) else {
        plan.deferred = packages.iter().map(|p| p.id.clone()).collect();
        return plan;
    };

    let mut current_volume = 0.0;
    for idx in order {
        let package = &packages[idx];

        if current_volume + package.volume <= target.volume {
            current_volume += package.volume;
            plan.placed.push(Placement {
                package_id: package.id.clone(),
                truck_id: target.id.clone(),
            });
        } else {
            plan.deferred.push(package.id.clone());
        }
    }

    if !plan.placed.is_empty() {
        plan.used_trucks.push(target.id.clone());
    }

    plan
}

/// Ranks trucks by `|volume - total|` (stable) and returns the first accepted.
fn select_truck(trucks: &[Truck], total_volume: f64, min_utilization: f64) -> Option<&Truck> {
    let mut ranked: Vec<&Truck> = trucks.iter().collect();
    ranked.sort_by(|a, b| {
        let da = (a.volume - total_volume).abs();
        let db = (b.volume - total_volume).abs();
        da.total_cmp(&db)
    });

    ranked.into_iter().find(|truck| {
        let ratio = total_volume / truck.volume;
        ratio >= min_utilization && total_volume <= truck.volume
    })
}
