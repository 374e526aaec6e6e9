//! spt-thermo: species reference-state thermodynamics.
//!
//! Provides:
//! - Temperature-polynomial builder shared by all polynomial families
//! - Per-species evaluators (constant cp, NASA-7, NASA-7 two-zone, NASA-9
//!   multi-zone, piecewise-linear mu0)
//! - `SpeciesThermoManager`, which updates cp/R, h/RT and s/R for a whole phase
//! - Serializable coefficient records and temperature sweeps
//!
//! All properties are dimensionless: heat capacity and entropy divided by the
//! gas constant R, enthalpy divided by RT. Coefficients are expected in the
//! same reduced form.
//!
//! # Example
//!
//! ```
//! use spt_thermo::{SpeciesThermoKind, SpeciesThermoManager};
//!
//! let mut manager = SpeciesThermoManager::new(1);
//! let coeffs = [298.15, 0.0, 18.62, 2.5];
//! manager
//!     .install("Ar", 0, SpeciesThermoKind::ConstCp, &coeffs, 200.0, 6000.0, 1e5)
//!     .unwrap();
//!
//! let (mut cp, mut h, mut s) = ([0.0], [0.0], [0.0]);
//! manager.update(1000.0, &mut cp, &mut h, &mut s).unwrap();
//! assert_eq!(cp[0], 2.5);
//! ```

pub mod config;
pub mod const_cp;
pub mod error;
pub mod interp;
pub mod kind;
pub mod manager;
pub mod mu0;
pub mod nasa7;
pub mod nasa9;
pub mod record;
pub mod sweep;
pub mod temp_poly;

// Re-exports for ergonomics
pub use config::{ManagerConfig, RefPressurePolicy};
pub use const_cp::ConstCpPoly;
pub use error::{ConfigError, ThermoError, ThermoResult};
pub use interp::{ParameterReport, RefStateProps, SpeciesRange, SpeciesThermo, SpeciesThermoInterp};
pub use kind::{KIND_TABLE_VERSION, SpeciesThermoKind};
pub use manager::SpeciesThermoManager;
pub use mu0::Mu0Poly;
pub use nasa7::{NasaPoly1, NasaPoly2};
pub use nasa9::Nasa9MultiZone;
pub use record::{SpeciesThermoRecord, SpeciesThermoSet};
pub use sweep::{PropertyRow, PropertyTable, SweepSpacing, TemperatureSweep};
pub use temp_poly::TempPoly;
