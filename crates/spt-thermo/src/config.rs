//! Manager configuration.

use spt_core::Tolerances;

/// How the manager treats reference pressures across species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RefPressurePolicy {
    /// Every species keeps its own reference pressure.
    #[default]
    PerSpecies,
    /// All species must share one reference pressure (ideal-gas phases).
    /// A disagreeing install fails with `InconsistentReferenceState`.
    Uniform,
}

/// Thermo manager configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ManagerConfig {
    /// Reference pressure policy
    pub ref_pressure_policy: RefPressurePolicy,
    /// Tolerance used when comparing reference pressures [Pa]
    pub ref_pressure_tol: Tolerances,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            ref_pressure_policy: RefPressurePolicy::PerSpecies,
            ref_pressure_tol: Tolerances {
                abs: 1e-6,
                rel: 1e-9,
            },
        }
    }
}

impl ManagerConfig {
    /// Configuration for phases that need one phase-wide reference pressure.
    pub fn uniform_ref_pressure() -> Self {
        Self {
            ref_pressure_policy: RefPressurePolicy::Uniform,
            ..Self::default()
        }
    }
}
