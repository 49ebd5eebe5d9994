//! Device-count configurations.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tierforge_catalog::TierCatalog;

/// Number of devices deployed per catalog tier, in tier order.
///
/// Ordering is lexicographic over the counts, which is also the order the
/// exhaustive search visits configurations in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Vec<u32>);

impl Configuration {
    /// All-zero configuration for `tier_count` tiers.
    pub fn zeros(tier_count: usize) -> Self {
        Self(vec![0; tier_count])
    }

    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn device_count(&self, tier: usize) -> u32 {
        self.0.get(tier).copied().unwrap_or(0)
    }

    pub fn set_device_count(&mut self, tier: usize, count: u32) {
        self.0[tier] = count;
    }

    /// Total bytes provided by `tier` in this configuration.
    pub fn tier_capacity(&self, catalog: &TierCatalog, tier: usize) -> f64 {
        catalog
            .get(tier)
            .map(|t| f64::from(self.device_count(tier)) * t.capacity_bytes)
            .unwrap_or(0.0)
    }

    /// Indices of tiers with at least one device, in tier order.
    pub fn populated_tiers(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(tier, _)| tier)
            .collect()
    }

    pub fn ensure_matches(&self, catalog: &TierCatalog) -> PlanResult<()> {
        if self.len() != catalog.len() {
            return Err(PlanError::TierCountMismatch {
                expected: catalog.len(),
                actual: self.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<u32>> for Configuration {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, "]")
    }
}
