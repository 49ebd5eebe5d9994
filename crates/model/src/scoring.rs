//! Dollar cost and average time per access.

use crate::config::Configuration;
use crate::simulator::AccessFractions;
use serde::{Deserialize, Serialize};
use std::fmt;
use tierforge_catalog::TierCatalog;

/// Total price of the devices in `config`.
pub fn config_cost(config: &Configuration, catalog: &TierCatalog) -> f64 {
    catalog
        .iter()
        .zip(config.counts())
        .map(|(tier, &count)| f64::from(count) * tier.unit_cost_dollars)
        .sum()
}

/// Average seconds per access when each tier serves accesses one at a time
/// at its IOPS rating.
pub fn avg_time_per_access(fractions: &AccessFractions, catalog: &TierCatalog) -> f64 {
    catalog
        .iter()
        .zip(fractions.as_slice())
        .map(|(tier, fraction)| fraction * tier.seconds_per_io())
        .sum()
}

/// Average device latency per access in seconds.
pub fn avg_latency_per_access(fractions: &AccessFractions, catalog: &TierCatalog) -> f64 {
    catalog
        .iter()
        .zip(fractions.as_slice())
        .map(|(tier, fraction)| fraction * tier.latency_seconds)
        .sum()
}

/// Which time metric the search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationGoal {
    #[default]
    Throughput,
    Latency,
}

impl OptimizationGoal {
    pub fn score(&self, fractions: &AccessFractions, catalog: &TierCatalog) -> f64 {
        match self {
            OptimizationGoal::Throughput => avg_time_per_access(fractions, catalog),
            OptimizationGoal::Latency => avg_latency_per_access(fractions, catalog),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptimizationGoal::Throughput => "throughput",
            OptimizationGoal::Latency => "latency",
        }
    }
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
