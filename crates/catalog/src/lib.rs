//! Storage technology catalog for tierforge.
//!
//! The catalog is the fixed input of every search: an ordered list of device
//! technologies, fastest and smallest first. A tier's position in the list is
//! its rank in the hierarchy.

pub mod tier;
pub mod units;

pub use tier::*;
pub use units::*;
