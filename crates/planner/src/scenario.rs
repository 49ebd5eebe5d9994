//! Scenario configuration: catalog, workload, budgets and goal in one JSON file.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tierforge_catalog::{TierCatalog, GB, TB};
use tierforge_model::{OptimizationGoal, Workload};

/// Which metrics a sweep optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalSelection {
    #[default]
    Throughput,
    Latency,
    Both,
}

impl GoalSelection {
    pub fn goals(&self) -> Vec<OptimizationGoal> {
        match self {
            GoalSelection::Throughput => vec![OptimizationGoal::Throughput],
            GoalSelection::Latency => vec![OptimizationGoal::Latency],
            GoalSelection::Both => vec![OptimizationGoal::Throughput, OptimizationGoal::Latency],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub catalog: TierCatalog,
    pub workload: Workload,
    /// Dollar limits, each searched independently.
    pub budgets: Vec<f64>,
    #[serde(default)]
    pub goal: GoalSelection,
}

impl ScenarioConfig {
    /// Hot 111 GB set, warm 1 TB set and a rarely touched 10 TB archive.
    pub fn default_workload() -> Workload {
        Workload::from_pairs(&[
            (0.8, 111.0 * GB),
            (0.2 - 0.001, 1.0 * TB),
            (0.001, 10.0 * TB),
        ])
        .expect("default workload is well formed")
    }

    pub fn default_budgets() -> Vec<f64> {
        vec![2000.0, 4000.0, 6000.0, 8000.0, 10000.0, 15000.0, 100000.0]
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        ensure!(
            !scenario.catalog.is_empty(),
            "scenario catalog must contain at least one tier"
        );
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            catalog: TierCatalog::default_hierarchy(),
            workload: Self::default_workload(),
            budgets: Self::default_budgets(),
            goal: GoalSelection::Throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_json() {
        let scenario = ScenarioConfig::default();
        let json = scenario.to_json().unwrap();
        let parsed = ScenarioConfig::from_json(&json).unwrap();
        assert_eq!(parsed.budgets, scenario.budgets);
        assert_eq!(parsed.catalog.len(), scenario.catalog.len());
        assert_eq!(parsed.catalog.find("HDD").map(|t| t.max_devices), Some(16));
        assert_eq!(parsed.workload.len(), 3);
    }

    #[test]
    fn test_goal_defaults_to_throughput() {
        let json = r#"{
            "catalog": {"tiers": [{"name": "ram", "capacity_bytes": 100.0,
                "unit_cost_dollars": 10.0, "iops": 1000.0,
                "latency_seconds": 1e-6, "max_devices": 4}]},
            "workload": [{"fraction": 1.0, "size_bytes": 50.0}],
            "budgets": [100.0]
        }"#;
        let scenario = ScenarioConfig::from_json(json).unwrap();
        assert_eq!(scenario.goal, GoalSelection::Throughput);
        assert_eq!(scenario.catalog.len(), 1);
    }

    #[test]
    fn test_invalid_workload_rejected() {
        let json = r#"{
            "catalog": {"tiers": [{"name": "ram", "capacity_bytes": 100.0,
                "unit_cost_dollars": 10.0, "iops": 1000.0,
                "latency_seconds": 1e-6, "max_devices": 4}]},
            "workload": [{"fraction": -1.0, "size_bytes": 50.0}],
            "budgets": []
        }"#;
        assert!(ScenarioConfig::from_json(json).is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let json = r#"{
            "catalog": {"tiers": []},
            "workload": [{"fraction": 1.0, "size_bytes": 50.0}],
            "budgets": [10.0]
        }"#;
        assert!(ScenarioConfig::from_json(json).is_err());
    }

    #[test]
    fn test_goal_selection_expands() {
        assert_eq!(GoalSelection::Both.goals().len(), 2);
        assert_eq!(GoalSelection::Latency.goals(), vec![OptimizationGoal::Latency]);
    }
}
