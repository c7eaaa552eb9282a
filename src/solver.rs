//! Horizon optimizer: forward DP over time units
//!
//! Finds the maximum profit attainable within the horizon and every
//! distinct building-count combination achieving it. A building that
//! finishes construction at time `t` earns its rate for each of the
//! `horizon - t` remaining time units, so a state only needs to track
//! time consumed so far, not construction order.

use crate::models::{Catalog, Combination, SolverError};

/// Optimizer result: the maximum profit and all combinations achieving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub max_profit: i64,
    /// Duplicate-free, kept in discovery order
    pub combinations: Vec<Combination>,
}

/// Per-time-step DP slot
#[derive(Debug, Clone)]
struct HorizonStep {
    profit: i64,
    solutions: Vec<Combination>,
}

/// Compute the maximum profit for `horizon` time units and enumerate all
/// optimal combinations.
///
/// Step `t` is seeded from step `t-1` (build nothing finishing at `t`),
/// then improved by every building type that could finish exactly at `t`.
/// A strictly better candidate replaces the solution set; an equal one is
/// unioned in. Ties are kept in full, including the degenerate ones where
/// a building finishes exactly at the horizon and earns nothing.
pub fn optimize(catalog: &Catalog, horizon: i64) -> Result<Solution, SolverError> {
    if horizon < 0 {
        return Err(SolverError::InvalidHorizon { horizon });
    }

    // Each step owns its own solution list from the start; slots are never
    // aliased to a shared default.
    let mut steps: Vec<HorizonStep> = Vec::with_capacity(horizon as usize + 1);
    steps.push(HorizonStep {
        profit: 0,
        solutions: vec![Combination::empty(catalog.len())],
    });

    for t in 1..=horizon {
        let mut best = HorizonStep {
            profit: steps[(t - 1) as usize].profit,
            solutions: steps[(t - 1) as usize].solutions.clone(),
        };

        for (index, building) in catalog.iter().enumerate() {
            if building.duration > t {
                continue;
            }

            // Construction finishes at t, then the building earns for the
            // remaining horizon - t time units.
            let operating_periods = horizon - t;
            let prev = &steps[(t - building.duration) as usize];
            let candidate = prev.profit + building.rate * operating_periods;

            if candidate > best.profit {
                best.profit = candidate;
                best.solutions = prev
                    .solutions
                    .iter()
                    .map(|combo| combo.with_one_more(index))
                    .collect();
            } else if candidate == best.profit {
                for combo in &prev.solutions {
                    let extended = combo.with_one_more(index);
                    if !best.solutions.contains(&extended) {
                        best.solutions.push(extended);
                    }
                }
            }
        }

        steps.push(best);
    }

    let last = steps.pop().unwrap_or_else(|| HorizonStep {
        profit: 0,
        solutions: vec![Combination::empty(catalog.len())],
    });
    Ok(Solution {
        max_profit: last.profit,
        combinations: last.solutions,
    })
}
