//! Exhaustive configuration search for tiered storage hierarchies.

pub mod outcome;
pub mod search;

pub use outcome::*;
pub use search::*;
