//! Structural validity of a configuration for a workload.

use crate::config::Configuration;
use crate::error::{PlanError, PlanResult};
use crate::workload::Workload;
use tierforge_catalog::TierCatalog;

/// Decide whether `config` forms a usable inclusive hierarchy for `workload`.
///
/// A configuration is valid when:
/// - tier 0 has at least one device,
/// - populated tiers never shrink in total capacity moving to slower tiers,
/// - the slowest populated tier can hold the whole working set.
///
/// Never fails; a configuration whose length differs from the catalog is invalid.
pub fn is_valid(config: &Configuration, catalog: &TierCatalog, workload: &Workload) -> bool {
    if config.len() != catalog.len() || config.device_count(0) == 0 {
        return false;
    }

    let populated = config.populated_tiers();
    let capacities: Vec<f64> = populated
        .iter()
        .map(|&tier| config.tier_capacity(catalog, tier))
        .collect();

    if capacities.windows(2).any(|pair| pair[1] < pair[0]) {
        return false;
    }

    match capacities.last() {
        Some(&slowest) => slowest >= workload.total_size(),
        None => false,
    }
}

/// Reject catalogs the search cannot operate on.
pub fn validate_catalog(catalog: &TierCatalog) -> PlanResult<()> {
    if catalog.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierforge_catalog::TechTier;

    fn three_tiers() -> TierCatalog {
        TierCatalog::new(vec![
            TechTier::new("fast", 100.0, 50.0, 1e6, 1e-7, 4),
            TechTier::new("mid", 1000.0, 20.0, 1e5, 1e-5, 4),
            TechTier::new("slow", 500.0, 5.0, 1e2, 1e-2, 8),
        ])
    }

    #[test]
    fn test_requires_fastest_tier() {
        let catalog = three_tiers();
        let workload = Workload::from_pairs(&[(1.0, 10.0)]).unwrap();
        assert!(!is_valid(&Configuration::from(vec![0, 1, 1]), &catalog, &workload));
        assert!(!is_valid(&Configuration::zeros(3), &catalog, &workload));
        assert!(is_valid(&Configuration::from(vec![1, 0, 0]), &catalog, &workload));
    }

    #[test]
    fn test_capacity_must_not_shrink() {
        let catalog = three_tiers();
        let workload = Workload::from_pairs(&[(1.0, 100.0)]).unwrap();
        // mid 1000 -> slow 500 shrinks
        assert!(!is_valid(&Configuration::from(vec![1, 1, 1]), &catalog, &workload));
        // mid 1000 -> slow 1000 is fine
        assert!(is_valid(&Configuration::from(vec![1, 1, 2]), &catalog, &workload));
        // skipped tiers are ignored: fast 100 -> slow 500
        assert!(is_valid(&Configuration::from(vec![1, 0, 1]), &catalog, &workload));
        assert!(is_valid(&Configuration::from(vec![3, 0, 1]), &catalog, &workload));
        // fast 600 -> slow 500 shrinks
        assert!(!is_valid(&Configuration::from(vec![6, 0, 1]), &catalog, &workload));
    }

    #[test]
    fn test_working_set_must_fit_in_slowest_tier() {
        let catalog = three_tiers();
        let workload = Workload::from_pairs(&[(0.5, 300.0), (0.5, 300.0)]).unwrap();
        assert!(!is_valid(&Configuration::from(vec![1, 0, 1]), &catalog, &workload));
        assert!(is_valid(&Configuration::from(vec![1, 0, 2]), &catalog, &workload));
        assert!(is_valid(&Configuration::from(vec![1, 1, 0]), &catalog, &workload));
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        let catalog = three_tiers();
        let workload = Workload::from_pairs(&[(1.0, 1.0)]).unwrap();
        assert!(!is_valid(&Configuration::from(vec![1, 1]), &catalog, &workload));
    }

    #[test]
    fn test_growing_slowest_tier_keeps_validity() {
        let catalog = TierCatalog::default_hierarchy();
        let workload =
            Workload::from_pairs(&[(0.8, 1e11), (0.199, 1e12), (0.001, 1e13)]).unwrap();

        fastrand::seed(7);
        let mut checked = 0;
        for _ in 0..2000 {
            let counts: Vec<u32> = catalog
                .iter()
                .map(|tier| fastrand::u32(0..tier.max_devices))
                .collect();
            let config = Configuration::from(counts);
            if !is_valid(&config, &catalog, &workload) {
                continue;
            }
            let slowest = *config.populated_tiers().last().unwrap();
            let mut grown = config.clone();
            grown.set_device_count(slowest, config.device_count(slowest) + 1);
            assert!(
                is_valid(&grown, &catalog, &workload),
                "{} valid but {} is not",
                config,
                grown
            );
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_validate_catalog() {
        assert_eq!(
            validate_catalog(&TierCatalog::new(Vec::new())),
            Err(PlanError::EmptyCatalog)
        );
        assert!(validate_catalog(&TierCatalog::default_hierarchy()).is_ok());
    }
}
