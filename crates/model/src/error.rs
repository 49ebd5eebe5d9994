//! Error taxonomy shared by the model and the search.

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("catalog must contain at least one tier")]
    EmptyCatalog,

    #[error("workload must contain at least one access group")]
    EmptyWorkload,

    #[error("access group {index} is invalid: fraction={fraction}, size={size}")]
    InvalidAccessGroup {
        index: usize,
        fraction: f64,
        size: f64,
    },

    #[error("cost limit must be finite and non-negative, got {cost_limit}")]
    InvalidCostLimit { cost_limit: f64 },

    #[error("configuration has {actual} tiers, catalog has {expected}")]
    TierCountMismatch { expected: usize, actual: usize },

    #[error("working set does not fit in the {tier_count} configured tiers")]
    WorkingSetOverflow { tier_count: usize },

    #[error("no feasible configuration under cost limit ${cost_limit}")]
    NoFeasibleConfiguration { cost_limit: f64 },
}
