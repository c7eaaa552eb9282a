//! Plan evaluator: fixed-order simulation of one combination
//!
//! Schedules a combination's instances in canonical catalog order, each
//! type's instances back-to-back, starting at time 0. This is one concrete
//! realizable schedule for the combination, not necessarily the
//! value-maximizing one: for mixed combinations total profit depends on
//! which types finish first, so the result may undershoot the optimizer's
//! reported maximum.

use crate::models::{Catalog, Combination};

/// Result of simulating a combination under the canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub profit: i64,
    pub time_used: i64,
    pub is_feasible: bool,
}

/// One building instance placed on the construction timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledBuild {
    /// Catalog position of the building type
    pub type_index: usize,
    /// 1-based instance number within the type
    pub instance: u32,
    pub start: i64,
    pub finish: i64,
    pub operating_periods: i64,
    pub earning: i64,
}

/// Lay out a combination's instances in canonical order.
///
/// Construction is serialized: each instance starts when the previous one
/// finishes. An instance finishing at or after the horizon gets zero
/// operating periods and zero earning.
pub fn timeline(catalog: &Catalog, horizon: i64, combination: &Combination) -> Vec<ScheduledBuild> {
    let mut builds = Vec::new();
    let mut current_time = 0;

    for (index, building) in catalog.iter().enumerate() {
        for instance in 1..=combination.count(index) {
            let start = current_time;
            let finish = start + building.duration;
            let operating_periods = (horizon - finish).max(0);
            builds.push(ScheduledBuild {
                type_index: index,
                instance,
                start,
                finish,
                operating_periods,
                earning: building.rate * operating_periods,
            });
            current_time = finish;
        }
    }

    builds
}

/// Simulate a combination and report its profit, elapsed construction time
/// and whether it fits within the horizon.
pub fn evaluate(catalog: &Catalog, horizon: i64, combination: &Combination) -> Evaluation {
    let builds = timeline(catalog, horizon, combination);
    let profit = builds.iter().map(|b| b.earning).sum();
    let time_used = builds.last().map_or(0, |b| b.finish);

    Evaluation {
        profit,
        time_used,
        is_feasible: time_used <= horizon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuildingType;

    fn full_catalog() -> Catalog {
        Catalog::new(vec![
            BuildingType::new("Theatre", "T", 5, 1500),
            BuildingType::new("Pub", "P", 4, 1000),
            BuildingType::new("Commercial Park", "C", 10, 3000),
        ])
        .unwrap()
    }

    #[test]
    fn empty_combination_uses_no_time() {
        let catalog = full_catalog();
        let evaluation = evaluate(&catalog, 12, &Combination::empty(3));
        assert_eq!(
            evaluation,
            Evaluation {
                profit: 0,
                time_used: 0,
                is_feasible: true,
            }
        );
        assert!(timeline(&catalog, 12, &Combination::empty(3)).is_empty());
    }

    #[test]
    fn single_theatre_over_ten_units() {
        let catalog = full_catalog();
        let combination = Combination::empty(3).with_one_more(0);
        let evaluation = evaluate(&catalog, 10, &combination);
        assert_eq!(evaluation.profit, 7500);
        assert_eq!(evaluation.time_used, 5);
        assert!(evaluation.is_feasible);
    }

    #[test]
    fn timeline_places_instances_back_to_back() {
        let catalog = full_catalog();
        let combination = Combination::empty(3).with_one_more(0).with_one_more(0).with_one_more(1);
        let builds = timeline(&catalog, 20, &combination);

        assert_eq!(builds.len(), 3);
        assert_eq!((builds[0].start, builds[0].finish), (0, 5));
        assert_eq!((builds[1].start, builds[1].finish), (5, 10));
        assert_eq!(builds[1].instance, 2);
        assert_eq!((builds[2].start, builds[2].finish), (10, 14));
        assert_eq!(builds[2].earning, 6000);
    }

    #[test]
    fn finishing_at_the_horizon_earns_nothing() {
        let catalog = full_catalog();
        let combination = Combination::empty(3).with_one_more(1);
        let evaluation = evaluate(&catalog, 4, &combination);
        assert_eq!(evaluation.profit, 0);
        assert_eq!(evaluation.time_used, 4);
        assert!(evaluation.is_feasible);
    }

    #[test]
    fn overrunning_the_horizon_is_infeasible() {
        let catalog = full_catalog();
        let combination = Combination::empty(3).with_one_more(2);
        let evaluation = evaluate(&catalog, 8, &combination);
        assert_eq!(evaluation.profit, 0);
        assert_eq!(evaluation.time_used, 10);
        assert!(!evaluation.is_feasible);
    }

    #[test]
    fn canonical_order_can_undershoot_mixed_combinations() {
        // With the Pub declared first it is scheduled first, pushing the
        // higher-rate Theatre later: 1000*6 + 1500*1 = 7500, while the
        // Theatre-first order would earn 1500*5 + 1000*1 = 8500.
        let catalog = Catalog::new(vec![
            BuildingType::new("Pub", "P", 4, 1000),
            BuildingType::new("Theatre", "T", 5, 1500),
        ])
        .unwrap();
        let combination = Combination::empty(2).with_one_more(0).with_one_more(1);
        let evaluation = evaluate(&catalog, 10, &combination);
        assert_eq!(evaluation.profit, 7500);
        assert_eq!(evaluation.time_used, 9);
        assert!(evaluation.is_feasible);
    }
}
