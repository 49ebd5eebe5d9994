//! Inclusive-cache workload simulation.
//!
//! Tiers are filled in rank order. Each access group claims space in the
//! current tier; when a group does not fit, the share of its accesses that the
//! remaining space covers is resolved there and the rest spills to the next
//! tier. The group keeps its full size in every tier it reaches, since an
//! inclusive hierarchy stores the same data again further down.

use crate::config::Configuration;
use crate::error::{PlanError, PlanResult};
use crate::workload::Workload;
use serde::{Deserialize, Serialize};
use tierforge_catalog::TierCatalog;

/// Relative capacity slack on the slowest populated tier. Feasibility sums the
/// group sizes while the simulation subtracts them one at a time.
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Fraction of all accesses resolved at each tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessFractions(Vec<f64>);

impl AccessFractions {
    pub fn zeros(tier_count: usize) -> Self {
        Self(vec![0.0; tier_count])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, tier: usize) -> f64 {
        self.0.get(tier).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    fn reset(&mut self, tier_count: usize) {
        self.0.clear();
        self.0.resize(tier_count, 0.0);
    }
}

impl From<Vec<f64>> for AccessFractions {
    fn from(fractions: Vec<f64>) -> Self {
        Self(fractions)
    }
}

/// Simulate `workload` on `config`, writing per-tier fractions into `out`.
///
/// `out` is cleared first, so one buffer can be reused across calls. Only
/// meaningful for configurations accepted by [`crate::is_valid`]; anything
/// else may run out of tiers and returns [`PlanError::WorkingSetOverflow`].
pub fn compute_access_fractions(
    workload: &Workload,
    config: &Configuration,
    catalog: &TierCatalog,
    out: &mut AccessFractions,
) -> PlanResult<()> {
    config.ensure_matches(catalog)?;
    let tier_count = catalog.len();
    out.reset(tier_count);

    let slowest = config.populated_tiers().last().copied();
    let mut tier = 0;
    let mut remaining = config.tier_capacity(catalog, tier);

    for group in workload.groups() {
        let mut fraction = group.fraction;
        loop {
            if tier >= tier_count {
                return Err(PlanError::WorkingSetOverflow { tier_count });
            }
            let slack = if Some(tier) == slowest {
                config.tier_capacity(catalog, tier) * CAPACITY_TOLERANCE
            } else {
                0.0
            };
            if group.size_bytes > remaining + slack {
                let served = (remaining / group.size_bytes) * fraction;
                out.0[tier] += served;
                fraction -= served;
                tier += 1;
                remaining = config.tier_capacity(catalog, tier);
            } else {
                out.0[tier] += fraction;
                remaining = (remaining - group.size_bytes).max(0.0);
                break;
            }
        }
    }

    Ok(())
}

/// Allocating form of [`compute_access_fractions`].
pub fn access_fractions(
    workload: &Workload,
    config: &Configuration,
    catalog: &TierCatalog,
) -> PlanResult<AccessFractions> {
    let mut out = AccessFractions::zeros(catalog.len());
    compute_access_fractions(workload, config, catalog, &mut out)?;
    Ok(out)
}
