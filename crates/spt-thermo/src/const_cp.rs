//! Constant heat capacity parameterization.

use crate::error::{ConfigError, ThermoResult};
use crate::interp::{RefStateProps, SpeciesRange, SpeciesThermoInterp, check_fixed_arity};
use crate::kind::SpeciesThermoKind;
use crate::temp_poly::TempPoly;

/// Constant cp/R about a reference temperature `t0`.
///
/// Coefficients: `[t0, h0/R, s0/R, cp/R]`, with `h0/R` in K.
///
/// ```text
/// cp/R = c
/// h/RT = (h0/R + c (T - t0)) / T
/// s/R  = s0/R + c ln(T / t0)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstCpPoly {
    range: SpeciesRange,
    coeffs: [f64; 4],
    ln_t0: f64,
}

impl ConstCpPoly {
    const KIND: SpeciesThermoKind = SpeciesThermoKind::ConstCp;

    pub fn new(range: SpeciesRange, coeffs: &[f64]) -> Result<Self, ConfigError> {
        check_fixed_arity(Self::KIND, coeffs)?;
        let t0 = coeffs[0];
        if t0 <= 0.0 {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "reference temperature t0 must be positive",
            });
        }
        Ok(Self {
            range,
            coeffs: [coeffs[0], coeffs[1], coeffs[2], coeffs[3]],
            ln_t0: t0.ln(),
        })
    }

    pub fn t0(&self) -> f64 {
        self.coeffs[0]
    }

    pub fn cp_r(&self) -> f64 {
        self.coeffs[3]
    }
}

impl SpeciesThermoInterp for ConstCpPoly {
    fn kind(&self) -> SpeciesThermoKind {
        Self::KIND
    }

    fn species_index(&self) -> usize {
        self.range.index
    }

    fn min_temp(&self) -> f64 {
        self.range.min_temp
    }

    fn max_temp(&self) -> f64 {
        self.range.max_temp
    }

    fn ref_pressure(&self) -> f64 {
        self.range.ref_pressure
    }

    fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    fn evaluate(&self, tt: &TempPoly) -> RefStateProps {
        let [t0, h0_r, s0_r, cp_r] = self.coeffs;
        RefStateProps {
            cp_r,
            h_rt: (h0_r + cp_r * (tt.t() - t0)) * tt.inv_t(),
            s_r: s0_r + cp_r * (tt.ln_t() - self.ln_t0),
        }
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        *self = Self::new(self.range, coeffs)?;
        Ok(())
    }
}
