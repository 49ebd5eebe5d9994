//! tierforge: find the cheapest-fastest storage hierarchy for a workload.
//!
//! Facade over the workspace crates.

pub use tierforge_catalog as catalog;
pub use tierforge_model as model;
pub use tierforge_planner as planner;
pub use tierforge_search as search;
