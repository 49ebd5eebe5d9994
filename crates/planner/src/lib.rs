//! Budget sweeps, scenario files and reporting on top of the configuration search.

#[cfg(feature = "cli")]
pub mod cli;
pub mod report;
pub mod scenario;
pub mod sweep;

#[cfg(feature = "cli")]
pub use cli::*;
pub use report::*;
pub use scenario::*;
pub use sweep::*;
