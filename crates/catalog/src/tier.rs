//! Technology descriptors and the ordered catalog.

use crate::units::{GB, K, M, MS, NS, TB, US};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One storage technology: the unit that gets provisioned `n` times in a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechTier {
    pub name: String,
    /// Capacity of a single device in bytes.
    pub capacity_bytes: f64,
    /// Price of a single device in dollars.
    pub unit_cost_dollars: f64,
    /// IO operations per second of a single device.
    pub iops: f64,
    pub latency_seconds: f64,
    /// Exclusive upper bound on the device count explored for this tier.
    pub max_devices: u32,
}

impl TechTier {
    pub fn new(
        name: impl Into<String>,
        capacity_bytes: f64,
        unit_cost_dollars: f64,
        iops: f64,
        latency_seconds: f64,
        max_devices: u32,
    ) -> Self {
        Self {
            name: name.into(),
            capacity_bytes,
            unit_cost_dollars,
            iops,
            latency_seconds,
            max_devices,
        }
    }

    /// Seconds per access when accesses are served one at a time.
    pub fn seconds_per_io(&self) -> f64 {
        1.0 / self.iops
    }
}

/// Ordered technology list; index 0 is the fastest, smallest tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCatalog {
    tiers: Vec<TechTier>,
}

impl TierCatalog {
    pub fn new(tiers: Vec<TechTier>) -> Self {
        Self { tiers }
    }

    /// RAM, NVM, SSD and HDD with the classic price/performance profile.
    pub fn default_hierarchy() -> Self {
        Self::new(vec![
            TechTier::new("RAM", 64.0 * GB, 500.0, 10.0 * M, 100.0 * NS, 16),
            TechTier::new("NVM", 256.0 * GB, 500.0, 5.0 * M, 400.0 * NS, 8),
            TechTier::new("SSD", 1.0 * TB, 500.0, 500.0 * K, 100.0 * US, 16),
            TechTier::new("HDD", 4.0 * TB, 200.0, 100.0, 10.0 * MS, 16),
        ])
    }

    pub fn tiers(&self) -> &[TechTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TechTier> {
        self.tiers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TechTier> {
        self.tiers.iter()
    }

    pub fn find(&self, name: &str) -> Option<&TechTier> {
        self.tiers.iter().find(|tier| tier.name == name)
    }

    /// Number of leaves an exhaustive search visits.
    pub fn search_space_size(&self) -> u128 {
        self.tiers
            .iter()
            .map(|tier| u128::from(tier.max_devices))
            .product()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        ensure!(!catalog.is_empty(), "catalog must contain at least one tier");
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::default_hierarchy()
    }
}
