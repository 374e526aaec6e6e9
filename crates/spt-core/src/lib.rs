//! spt-core: shared foundation for the species reference-state workspace.
//!
//! Contains:
//! - units (uom SI types + constructors, reference pressures)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SptError, SptResult};
pub use numeric::*;
pub use units::*;
