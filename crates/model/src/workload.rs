//! Workload description: how accesses spread over datasets of different sizes.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// One workload bucket: `fraction` of all accesses touch a dataset of `size_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessGroup {
    pub fraction: f64,
    pub size_bytes: f64,
}

impl AccessGroup {
    pub fn new(fraction: f64, size_bytes: f64) -> Self {
        Self {
            fraction,
            size_bytes,
        }
    }

    fn is_well_formed(&self) -> bool {
        self.fraction.is_finite()
            && self.size_bytes.is_finite()
            && self.fraction >= 0.0
            && self.size_bytes >= 0.0
    }
}

/// Ordered, validated list of access groups.
///
/// Fractions conventionally sum to one but this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AccessGroup>", into = "Vec<AccessGroup>")]
pub struct Workload {
    groups: Vec<AccessGroup>,
}

impl Workload {
    pub fn new(groups: Vec<AccessGroup>) -> PlanResult<Self> {
        if groups.is_empty() {
            return Err(PlanError::EmptyWorkload);
        }
        if let Some((index, group)) = groups
            .iter()
            .enumerate()
            .find(|(_, group)| !group.is_well_formed())
        {
            return Err(PlanError::InvalidAccessGroup {
                index,
                fraction: group.fraction,
                size: group.size_bytes,
            });
        }
        Ok(Self { groups })
    }

    /// Build from `(fraction, size_bytes)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> PlanResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(fraction, size)| AccessGroup::new(fraction, size))
                .collect(),
        )
    }

    pub fn groups(&self) -> &[AccessGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Bytes needed to hold every dataset at once.
    pub fn total_size(&self) -> f64 {
        self.groups.iter().map(|g| g.size_bytes).sum()
    }

    pub fn total_fraction(&self) -> f64 {
        self.groups.iter().map(|g| g.fraction).sum()
    }
}

impl TryFrom<Vec<AccessGroup>> for Workload {
    type Error = PlanError;

    fn try_from(groups: Vec<AccessGroup>) -> PlanResult<Self> {
        Self::new(groups)
    }
}

impl From<Workload> for Vec<AccessGroup> {
    fn from(workload: Workload) -> Self {
        workload.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_rejects_empty() {
        assert_eq!(Workload::new(Vec::new()), Err(PlanError::EmptyWorkload));
    }

    #[test]
    fn test_workload_rejects_negative_values() {
        let err = Workload::from_pairs(&[(0.5, 10.0), (-0.1, 10.0)]).unwrap_err();
        assert!(matches!(err, PlanError::InvalidAccessGroup { index: 1, .. }));

        let err = Workload::from_pairs(&[(0.5, -1.0)]).unwrap_err();
        assert!(matches!(err, PlanError::InvalidAccessGroup { index: 0, .. }));

        assert!(Workload::from_pairs(&[(f64::NAN, 1.0)]).is_err());
    }

    #[test]
    fn test_workload_totals() {
        let workload = Workload::from_pairs(&[(0.8, 100.0), (0.2, 50.0)]).unwrap();
        assert_eq!(workload.total_size(), 150.0);
        assert!((workload.total_fraction() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_workload_deserialization_validates() {
        let ok: Workload =
            serde_json::from_str(r#"[{"fraction": 1.0, "size_bytes": 64.0}]"#).unwrap();
        assert_eq!(ok.len(), 1);

        let bad: Result<Workload, _> = serde_json::from_str("[]");
        assert!(bad.is_err());
    }
}
