//! Configuration enumeration and selection.
//!
//! Every device-count combination allowed by the catalog is visited, tier by
//! tier with the last tier varying fastest. Leaves that fail the feasibility
//! check or reach the cost limit are skipped; the rest are simulated and
//! ranked by [`SearchOutcome::rank`].

use crate::outcome::{rank_candidates, SearchOutcome, SearchStats};
use std::cmp::Ordering;
use tierforge_catalog::TierCatalog;
use tierforge_model::{
    compute_access_fractions, config_cost, is_valid, validate_catalog, AccessFractions,
    Configuration, OptimizationGoal, PlanError, PlanResult, Workload,
};
use tracing::{debug, info};

/// Exhaustive search over one catalog.
pub struct ConfigurationSearch<'a> {
    catalog: &'a TierCatalog,
}

impl<'a> ConfigurationSearch<'a> {
    pub fn new(catalog: &'a TierCatalog) -> Self {
        Self { catalog }
    }

    /// Find the fastest feasible configuration costing strictly less than
    /// `cost_limit`.
    ///
    /// Returns [`PlanError::NoFeasibleConfiguration`] when no configuration
    /// qualifies and [`PlanError::InvalidCostLimit`] for NaN, infinite or
    /// negative limits.
    pub fn find_best_config(
        &self,
        workload: &Workload,
        cost_limit: f64,
        goal: OptimizationGoal,
    ) -> PlanResult<SearchOutcome> {
        validate_catalog(self.catalog)?;
        if !cost_limit.is_finite() || cost_limit < 0.0 {
            return Err(PlanError::InvalidCostLimit { cost_limit });
        }

        let mut state = SearchState::new(self.catalog, workload, cost_limit, goal);
        state.enumerate(0)?;

        info!(
            goal = %goal,
            cost_limit,
            leaves = state.stats.leaves,
            feasible = state.stats.feasible,
            within_budget = state.stats.within_budget,
            found = state.best.is_some(),
            "configuration search finished"
        );

        let stats = state.stats;
        let best = state
            .best
            .ok_or(PlanError::NoFeasibleConfiguration { cost_limit })?;

        Ok(SearchOutcome {
            configuration: best.configuration,
            fractions: best.fractions,
            cost: best.cost,
            time: best.time,
            goal,
            cost_limit,
            stats,
        })
    }
}

struct Candidate {
    configuration: Configuration,
    fractions: AccessFractions,
    cost: f64,
    time: f64,
}

/// Scratch buffers and running best for one search call.
struct SearchState<'s> {
    catalog: &'s TierCatalog,
    workload: &'s Workload,
    cost_limit: f64,
    goal: OptimizationGoal,
    current: Configuration,
    fractions: AccessFractions,
    best: Option<Candidate>,
    stats: SearchStats,
}

impl<'s> SearchState<'s> {
    fn new(
        catalog: &'s TierCatalog,
        workload: &'s Workload,
        cost_limit: f64,
        goal: OptimizationGoal,
    ) -> Self {
        Self {
            catalog,
            workload,
            cost_limit,
            goal,
            current: Configuration::zeros(catalog.len()),
            fractions: AccessFractions::zeros(catalog.len()),
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn enumerate(&mut self, position: usize) -> PlanResult<()> {
        if position == self.catalog.len() {
            return self.visit_leaf();
        }

        let max_devices = self.catalog.tiers()[position].max_devices;
        for count in 0..max_devices {
            self.current.set_device_count(position, count);
            self.enumerate(position + 1)?;
        }
        Ok(())
    }

    fn visit_leaf(&mut self) -> PlanResult<()> {
        self.stats.leaves += 1;

        if !is_valid(&self.current, self.catalog, self.workload) {
            return Ok(());
        }
        self.stats.feasible += 1;

        let cost = config_cost(&self.current, self.catalog);
        if cost >= self.cost_limit {
            return Ok(());
        }
        self.stats.within_budget += 1;

        compute_access_fractions(self.workload, &self.current, self.catalog, &mut self.fractions)?;
        let time = self.goal.score(&self.fractions, self.catalog);

        let improves = match &self.best {
            None => true,
            Some(best) => {
                rank_candidates(
                    (time, cost, &self.current),
                    (best.time, best.cost, &best.configuration),
                ) == Ordering::Less
            }
        };

        if improves {
            debug!(
                configuration = %self.current,
                cost,
                time,
                "new best configuration"
            );
            self.best = Some(Candidate {
                configuration: self.current.clone(),
                fractions: self.fractions.clone(),
                cost,
                time,
            });
        }
        Ok(())
    }
}
