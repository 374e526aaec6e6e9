//! Single-species reference-state evaluators.
//!
//! [`SpeciesThermoInterp`] is the per-species contract: it knows which slot of
//! the phase-wide `cp_R`/`h_RT`/`s_R` arrays it owns and writes only that slot.
//! [`SpeciesThermo`] is the closed set of families the manager stores by value.

use crate::const_cp::ConstCpPoly;
use crate::error::{ConfigError, ThermoResult};
use crate::kind::SpeciesThermoKind;
use crate::mu0::Mu0Poly;
use crate::nasa7::{NasaPoly1, NasaPoly2};
use crate::nasa9::Nasa9MultiZone;
use crate::temp_poly::TempPoly;
use spt_core::ensure_finite;

/// Dimensionless reference-state properties of one species at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefStateProps {
    /// cp / R
    pub cp_r: f64,
    /// h / (R T)
    pub h_rt: f64,
    /// s / R
    pub s_r: f64,
}

impl RefStateProps {
    /// g / (R T) = h/RT - s/R
    pub fn g_rt(&self) -> f64 {
        self.h_rt - self.s_r
    }
}

/// Slot index, validity range and reference pressure common to every family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRange {
    pub index: usize,
    pub min_temp: f64,
    pub max_temp: f64,
    pub ref_pressure: f64,
}

impl SpeciesRange {
    pub fn new(
        index: usize,
        min_temp: f64,
        max_temp: f64,
        ref_pressure: f64,
    ) -> Result<Self, ConfigError> {
        ensure_finite(min_temp, "min_temp")?;
        ensure_finite(max_temp, "max_temp")?;
        ensure_finite(ref_pressure, "ref_pressure")?;
        if min_temp >= max_temp {
            return Err(ConfigError::InvalidTempRange {
                min: min_temp,
                max: max_temp,
            });
        }
        if ref_pressure <= 0.0 {
            return Err(ConfigError::NonPositiveRefPressure {
                value: ref_pressure,
            });
        }
        Ok(Self {
            index,
            min_temp,
            max_temp,
            ref_pressure,
        })
    }
}

/// Everything needed to rebuild an evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterReport {
    pub index: usize,
    pub kind: SpeciesThermoKind,
    pub min_temp: f64,
    pub max_temp: f64,
    pub ref_pressure: f64,
    pub coeffs: Vec<f64>,
}

/// Reference-state parameterization of a single species.
///
/// Evaluation outside `[min_temp, max_temp]` extrapolates silently; callers
/// that care compare against the bounds themselves.
pub trait SpeciesThermoInterp {
    fn kind(&self) -> SpeciesThermoKind;

    /// Slot written by the update methods.
    fn species_index(&self) -> usize;

    fn min_temp(&self) -> f64;

    fn max_temp(&self) -> f64;

    /// Reference pressure [Pa].
    fn ref_pressure(&self) -> f64;

    /// Coefficients exactly as installed (or last modified).
    fn coeffs(&self) -> &[f64];

    /// Evaluate cp/R, h/RT and s/R from a prebuilt temperature polynomial.
    fn evaluate(&self, tt: &TempPoly) -> RefStateProps;

    /// Replace the coefficients, keeping kind, range and reference pressure.
    ///
    /// The new coefficients go through the same checks as construction. On
    /// error the evaluator is left untouched.
    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()>;

    /// Write this species' slot of each output array. Other slots are not touched.
    ///
    /// # Panics
    /// If any array is shorter than `species_index() + 1`.
    fn update_properties(
        &self,
        tt: &TempPoly,
        cp_r: &mut [f64],
        h_rt: &mut [f64],
        s_r: &mut [f64],
    ) {
        let k = self.species_index();
        let props = self.evaluate(tt);
        cp_r[k] = props.cp_r;
        h_rt[k] = props.h_rt;
        s_r[k] = props.s_r;
    }

    /// Same as [`update_properties`](Self::update_properties), building the
    /// temperature polynomial internally.
    fn update_properties_temp(
        &self,
        t: f64,
        cp_r: &mut [f64],
        h_rt: &mut [f64],
        s_r: &mut [f64],
    ) {
        self.update_properties(&TempPoly::new(t), cp_r, h_rt, s_r);
    }

    fn report_parameters(&self) -> ParameterReport {
        ParameterReport {
            index: self.species_index(),
            kind: self.kind(),
            min_temp: self.min_temp(),
            max_temp: self.max_temp(),
            ref_pressure: self.ref_pressure(),
            coeffs: self.coeffs().to_vec(),
        }
    }
}

/// Check a fixed-layout coefficient slice and reject non-finite entries.
pub(crate) fn check_fixed_arity(
    kind: SpeciesThermoKind,
    coeffs: &[f64],
) -> Result<(), ConfigError> {
    if let Some(expected) = kind.fixed_arity() {
        if coeffs.len() != expected {
            return Err(ConfigError::CoefficientCount {
                kind,
                expected,
                found: coeffs.len(),
            });
        }
    }
    spt_core::ensure_all_finite(coeffs, "coefficient")?;
    Ok(())
}

/// Read a count stored as the first coefficient (Mu0, NASA-9 layouts).
pub(crate) fn leading_count(
    kind: SpeciesThermoKind,
    coeffs: &[f64],
    min: usize,
) -> Result<usize, ConfigError> {
    let Some(&raw) = coeffs.first() else {
        return Err(ConfigError::CoefficientCount {
            kind,
            expected: 1,
            found: 0,
        });
    };
    ensure_finite(raw, "coefficient count")?;
    if raw.fract() != 0.0 || raw < min as f64 {
        return Err(ConfigError::InvalidCoefficients {
            kind,
            what: "leading count must be an integer at or above the family minimum",
        });
    }
    Ok(raw as usize)
}

/// Closed set of parameterization families, stored by value in the manager.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesThermo {
    ConstCp(ConstCpPoly),
    Mu0Interp(Mu0Poly),
    Nasa7(NasaPoly1),
    Nasa7TwoZone(NasaPoly2),
    Nasa9MultiZone(Nasa9MultiZone),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            SpeciesThermo::ConstCp($inner) => $body,
            SpeciesThermo::Mu0Interp($inner) => $body,
            SpeciesThermo::Nasa7($inner) => $body,
            SpeciesThermo::Nasa7TwoZone($inner) => $body,
            SpeciesThermo::Nasa9MultiZone($inner) => $body,
        }
    };
}

impl SpeciesThermo {
    /// Build the evaluator registered for `kind`.
    pub fn new(
        index: usize,
        kind: SpeciesThermoKind,
        coeffs: &[f64],
        min_temp: f64,
        max_temp: f64,
        ref_pressure: f64,
    ) -> ThermoResult<Self> {
        let range = SpeciesRange::new(index, min_temp, max_temp, ref_pressure)?;
        let thermo = match kind {
            SpeciesThermoKind::ConstCp => Self::ConstCp(ConstCpPoly::new(range, coeffs)?),
            SpeciesThermoKind::Mu0Interp => Self::Mu0Interp(Mu0Poly::new(range, coeffs)?),
            SpeciesThermoKind::Nasa7 => Self::Nasa7(NasaPoly1::new(range, coeffs)?),
            SpeciesThermoKind::Nasa7TwoZone => Self::Nasa7TwoZone(NasaPoly2::new(range, coeffs)?),
            SpeciesThermoKind::Nasa9MultiZone => {
                Self::Nasa9MultiZone(Nasa9MultiZone::new(range, coeffs)?)
            }
        };
        Ok(thermo)
    }

    /// Rebuild from a previous report.
    pub fn from_report(report: &ParameterReport) -> ThermoResult<Self> {
        Self::new(
            report.index,
            report.kind,
            &report.coeffs,
            report.min_temp,
            report.max_temp,
            report.ref_pressure,
        )
    }

    /// Whether `t` lies inside this species' validity range (inclusive).
    pub fn in_range(&self, t: f64) -> bool {
        (self.min_temp()..=self.max_temp()).contains(&t)
    }
}

impl SpeciesThermoInterp for SpeciesThermo {
    fn kind(&self) -> SpeciesThermoKind {
        dispatch!(self, p => p.kind())
    }

    fn species_index(&self) -> usize {
        dispatch!(self, p => p.species_index())
    }

    fn min_temp(&self) -> f64 {
        dispatch!(self, p => p.min_temp())
    }

    fn max_temp(&self) -> f64 {
        dispatch!(self, p => p.max_temp())
    }

    fn ref_pressure(&self) -> f64 {
        dispatch!(self, p => p.ref_pressure())
    }

    fn coeffs(&self) -> &[f64] {
        dispatch!(self, p => p.coeffs())
    }

    #[inline]
    fn evaluate(&self, tt: &TempPoly) -> RefStateProps {
        dispatch!(self, p => p.evaluate(tt))
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        dispatch!(self, p => p.modify_parameters(coeffs))
    }
}
