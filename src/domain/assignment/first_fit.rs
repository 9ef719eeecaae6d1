//! Length-based First-Fit-Decreasing across all available trucks.
//!
//! Packages are taken largest volume first. Each one goes into the first
//! truck (in retrieval order) whose remaining length can hold the package's
//! length. Trucks are one-dimensional bins here: width and height are ignored.

use super::{AssignmentPlan, Placement, Strategy, volume_descending};
use crate::domain::entities::{Package, Truck};

struct Bin<'a> {
    truck: &'a Truck,
    used_length: f64,
    loaded: usize,
}

impl Bin<'_> {
    fn fits(&self, package: &Package) -> bool {
        self.used_length + package.length <= self.truck.length
    }
}

pub fn plan(packages: &[Package], trucks: &[Truck]) -> AssignmentPlan {
    let mut bins: Vec<Bin<'_>> = trucks
        .iter()
        .map(|truck| Bin {
            truck,
            used_length: 0.0,
            loaded: 0,
        })
        .collect();

    let mut plan = AssignmentPlan::new(Strategy::LengthFirstFitDecreasing);

    for idx in volume_descending(packages) {
        let package = &packages[idx];

        match bins.iter_mut().find(|bin| bin.fits(package)) {
            Some(bin) => {
                bin.used_length += package.length;
                bin.loaded += 1;
                plan.placed.push(Placement {
                    package_id: package.id.clone(),
                    truck_id: bin.truck.id.clone(),
                });
            }
            None => plan.deferred.push(package.id.clone()),
        }
    }

    plan.used_trucks = bins
        .iter()
        .filter(|bin| bin.loaded > 0)
        .map(|bin| bin.truck.id.clone())
        .collect();

    plan
}
