//! Search results and counters.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tierforge_model::{AccessFractions, Configuration, OptimizationGoal};

/// Counters collected while walking the configuration space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Complete configurations visited.
    pub leaves: u64,
    /// Leaves accepted by the feasibility check.
    pub feasible: u64,
    /// Feasible leaves strictly under the cost limit.
    pub within_budget: u64,
}

/// Best configuration found for one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub configuration: Configuration,
    pub fractions: AccessFractions,
    pub cost: f64,
    /// Average seconds per access under `goal`.
    pub time: f64,
    pub goal: OptimizationGoal,
    pub cost_limit: f64,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn ops_per_second(&self) -> f64 {
        1.0 / self.time
    }

    /// Selection order: lower time, then lower cost, then the
    /// lexicographically smaller configuration.
    pub fn rank(&self, other: &SearchOutcome) -> Ordering {
        rank_candidates(
            (self.time, self.cost, &self.configuration),
            (other.time, other.cost, &other.configuration),
        )
    }
}

pub(crate) fn rank_candidates(
    (time_a, cost_a, config_a): (f64, f64, &Configuration),
    (time_b, cost_b, config_b): (f64, f64, &Configuration),
) -> Ordering {
    time_a
        .total_cmp(&time_b)
        .then(cost_a.total_cmp(&cost_b))
        .then_with(|| config_a.cmp(config_b))
}
