//! Species thermo errors.

use crate::kind::SpeciesThermoKind;
use spt_core::SptError;
use thiserror::Error;

/// Result type for species thermo operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Rejected coefficients, range or reference pressure.
///
/// Raised only while building an evaluator (install or modify); evaluation
/// itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Coefficient slice length does not match what the family requires.
    #[error("{kind} expects {expected} coefficients, got {found}")]
    CoefficientCount {
        kind: SpeciesThermoKind,
        expected: usize,
        found: usize,
    },

    /// `min_temp` must be strictly below `max_temp`.
    #[error("Invalid temperature range: min {min} K must be below max {max} K")]
    InvalidTempRange { min: f64, max: f64 },

    /// Reference pressure must be positive.
    #[error("Reference pressure must be positive, got {value} Pa")]
    NonPositiveRefPressure { value: f64 },

    /// NaN or infinite input.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Family-specific structural problem (zone ordering, missing node, ...).
    #[error("Invalid {kind} coefficients: {what}")]
    InvalidCoefficients {
        kind: SpeciesThermoKind,
        what: &'static str,
    },

    #[error(transparent)]
    Core(SptError),
}

impl From<SptError> for ConfigError {
    fn from(err: SptError) -> Self {
        match err {
            SptError::NonFinite { what, value } => ConfigError::NonFinite { what, value },
            other => ConfigError::Core(other),
        }
    }
}

/// Errors raised by the thermo manager and evaluators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Species index {index} out of range (n_species={n_species})")]
    IndexOutOfRange { index: usize, n_species: usize },

    #[error("No thermo parameterization installed for species index {index}")]
    NotInstalled { index: usize },

    #[error("Manager not ready: {missing} species uninstalled (first: index {first_missing})")]
    NotReady { missing: usize, first_missing: usize },

    #[error(
        "Inconsistent reference pressure for species {index}: {ref_pressure} Pa, phase uses {expected} Pa"
    )]
    InconsistentReferenceState {
        index: usize,
        ref_pressure: f64,
        expected: f64,
    },

    #[error("Output buffer {what} has length {len}, expected {expected}")]
    BufferLength {
        what: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Invalid temperature sweep: {what}")]
    InvalidSweep { what: &'static str },
}

impl ThermoError {
    /// Bad coefficients, range or reference pressure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ThermoError::Configuration(_))
    }

    /// Index outside the declared species or pointing at an empty slot.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            ThermoError::IndexOutOfRange { .. } | ThermoError::NotInstalled { .. }
        )
    }
}

impl From<ThermoError> for SptError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::Configuration(_) => SptError::InvalidArg {
                what: "species thermo configuration",
            },
            ThermoError::IndexOutOfRange { index, n_species } => SptError::IndexOob {
                what: "species index",
                index,
                len: n_species,
            },
            ThermoError::NotInstalled { .. } => SptError::InvalidArg {
                what: "species thermo not installed",
            },
            ThermoError::NotReady { .. } => SptError::Invariant {
                what: "species thermo manager not ready",
            },
            ThermoError::InconsistentReferenceState { .. } => SptError::Invariant {
                what: "inconsistent reference pressure",
            },
            ThermoError::BufferLength { len, expected, .. } => SptError::IndexOob {
                what: "output buffer length",
                index: len,
                len: expected,
            },
            ThermoError::InvalidSweep { what } => SptError::InvalidArg { what },
        }
    }
}
