//! Cost and performance model for tiered storage configurations.
//!
//! # Key Components
//!
//! - [`workload::Workload`]: access-size buckets describing what the hierarchy must serve
//! - [`config::Configuration`]: device count per catalog tier
//! - [`feasibility::is_valid`]: structural checks for inclusive hierarchies
//! - [`simulator::compute_access_fractions`]: where each access is resolved
//! - [`scoring`]: dollar cost and average time per access

pub mod config;
pub mod error;
pub mod feasibility;
pub mod scoring;
pub mod simulator;
pub mod workload;

pub use config::Configuration;
pub use error::{PlanError, PlanResult};
pub use feasibility::{is_valid, validate_catalog};
pub use scoring::{avg_latency_per_access, avg_time_per_access, config_cost, OptimizationGoal};
pub use simulator::{access_fractions, compute_access_fractions, AccessFractions};
pub use workload::{AccessGroup, Workload};
