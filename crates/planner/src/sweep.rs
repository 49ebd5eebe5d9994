//! Budget sweeps: one configuration search per (budget, goal) pair.

use crate::scenario::ScenarioConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tierforge_catalog::TierCatalog;
use tierforge_model::{OptimizationGoal, PlanError, Workload};
use tierforge_search::{ConfigurationSearch, SearchOutcome};
use tracing::{info, warn};

/// Result of searching a single budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetResult {
    Found {
        outcome: SearchOutcome,
    },
    NoFeasibleConfiguration {
        cost_limit: f64,
        goal: OptimizationGoal,
    },
}

impl BudgetResult {
    pub fn cost_limit(&self) -> f64 {
        match self {
            BudgetResult::Found { outcome } => outcome.cost_limit,
            BudgetResult::NoFeasibleConfiguration { cost_limit, .. } => *cost_limit,
        }
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            BudgetResult::Found { outcome } => Some(outcome),
            BudgetResult::NoFeasibleConfiguration { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub generated_at_unix_ms: u128,
    pub catalog: TierCatalog,
    pub workload: Workload,
    pub results: Vec<BudgetResult>,
}

pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis()
}

/// Search one budget, turning "nothing fits" into a reportable result.
pub fn search_budget(
    catalog: &TierCatalog,
    workload: &Workload,
    cost_limit: f64,
    goal: OptimizationGoal,
) -> Result<BudgetResult> {
    match ConfigurationSearch::new(catalog).find_best_config(workload, cost_limit, goal) {
        Ok(outcome) => Ok(BudgetResult::Found { outcome }),
        Err(PlanError::NoFeasibleConfiguration { cost_limit }) => {
            warn!(cost_limit, goal = %goal, "no feasible configuration within budget");
            Ok(BudgetResult::NoFeasibleConfiguration { cost_limit, goal })
        }
        Err(e) => Err(e.into()),
    }
}

/// Run every budget of `scenario` for every selected goal, budgets outermost.
pub fn run_sweep(scenario: &ScenarioConfig) -> Result<SweepReport> {
    let goals = scenario.goal.goals();
    let mut results = Vec::with_capacity(scenario.budgets.len() * goals.len());

    for &budget in &scenario.budgets {
        for &goal in &goals {
            info!(budget, goal = %goal, "searching budget");
            results.push(search_budget(
                &scenario.catalog,
                &scenario.workload,
                budget,
                goal,
            )?);
        }
    }

    Ok(SweepReport {
        generated_at_unix_ms: unix_millis(),
        catalog: scenario.catalog.clone(),
        workload: scenario.workload.clone(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::GoalSelection;
    use tierforge_catalog::TechTier;

    fn small_scenario() -> ScenarioConfig {
        ScenarioConfig {
            catalog: TierCatalog::new(vec![
                TechTier::new("fast", 10.0, 100.0, 1000.0, 1e-6, 4),
                TechTier::new("slow", 1000.0, 10.0, 10.0, 1e-3, 4),
            ]),
            workload: Workload::from_pairs(&[(0.5, 5.0), (0.5, 100.0)]).unwrap(),
            budgets: vec![50.0, 200.0, 1000.0],
            goal: GoalSelection::Both,
        }
    }

    #[test]
    fn test_sweep_covers_every_budget_and_goal() {
        let report = run_sweep(&small_scenario()).unwrap();
        assert_eq!(report.results.len(), 6);

        let limits: Vec<f64> = report.results.iter().map(|r| r.cost_limit()).collect();
        assert_eq!(limits, vec![50.0, 50.0, 200.0, 200.0, 1000.0, 1000.0]);
    }

    #[test]
    fn test_unreachable_budget_reported_explicitly() {
        let report = run_sweep(&small_scenario()).unwrap();
        assert!(matches!(
            report.results[0],
            BudgetResult::NoFeasibleConfiguration {
                goal: OptimizationGoal::Throughput,
                ..
            }
        ));
        assert!(report.results[0].outcome().is_none());
        assert!(report.results[2].outcome().is_some());
    }

    #[test]
    fn test_nan_budget_aborts_sweep() {
        let scenario = ScenarioConfig {
            budgets: vec![200.0, f64::NAN],
            ..small_scenario()
        };
        let err = run_sweep(&scenario).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlanError>().map(|e| matches!(e, PlanError::InvalidCostLimit { .. })),
            Some(true)
        );
    }

    #[test]
    fn test_budget_result_json_is_tagged() {
        let result = BudgetResult::NoFeasibleConfiguration {
            cost_limit: 10.0,
            goal: OptimizationGoal::Latency,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"no_feasible_configuration\""));
    }
}
