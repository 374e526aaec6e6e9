//! 7-coefficient NASA polynomials, single and two temperature zones.

use crate::error::{ConfigError, ThermoResult};
use crate::interp::{RefStateProps, SpeciesRange, SpeciesThermoInterp, check_fixed_arity};
use crate::kind::SpeciesThermoKind;
use crate::temp_poly::TempPoly;

/// Evaluate one NASA-7 zone `[a0..a6]`.
///
/// ```text
/// cp/R = a0 + a1 T + a2 T² + a3 T³ + a4 T⁴
/// h/RT = a0 + a1 T/2 + a2 T²/3 + a3 T³/4 + a4 T⁴/5 + a5/T
/// s/R  = a0 ln T + a1 T + a2 T²/2 + a3 T³/3 + a4 T⁴/4 + a6
/// ```
#[inline]
pub(crate) fn nasa7_zone(a: &[f64], tt: &TempPoly) -> RefStateProps {
    let (t, t2, t3, t4) = (tt.t(), tt.t2(), tt.t3(), tt.t4());
    RefStateProps {
        cp_r: a[0] + a[1] * t + a[2] * t2 + a[3] * t3 + a[4] * t4,
        h_rt: a[0]
            + a[1] * t / 2.0
            + a[2] * t2 / 3.0
            + a[3] * t3 / 4.0
            + a[4] * t4 / 5.0
            + a[5] * tt.inv_t(),
        s_r: a[0] * tt.ln_t()
            + a[1] * t
            + a[2] * t2 / 2.0
            + a[3] * t3 / 3.0
            + a[4] * t4 / 4.0
            + a[6],
    }
}

/// Single-zone NASA-7 polynomial valid over the whole species range.
#[derive(Debug, Clone, PartialEq)]
pub struct NasaPoly1 {
    range: SpeciesRange,
    coeffs: [f64; 7],
}

impl NasaPoly1 {
    const KIND: SpeciesThermoKind = SpeciesThermoKind::Nasa7;

    pub fn new(range: SpeciesRange, coeffs: &[f64]) -> Result<Self, ConfigError> {
        check_fixed_arity(Self::KIND, coeffs)?;
        let mut a = [0.0; 7];
        a.copy_from_slice(coeffs);
        Ok(Self { range, coeffs: a })
    }
}

impl SpeciesThermoInterp for NasaPoly1 {
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
        nasa7_zone(&self.coeffs, tt)
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        *self = Self::new(self.range, coeffs)?;
        Ok(())
    }
}

/// Two NASA-7 zones split at `t_mid`.
///
/// Coefficients: `[t_mid, low a0..a6, high a0..a6]`. `T < t_mid` uses the low
/// zone; `T >= t_mid` uses the high zone, so the midpoint itself belongs to
/// the upper zone. Continuity at `t_mid` is a property of the fit and is not
/// checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NasaPoly2 {
    range: SpeciesRange,
    coeffs: [f64; 15],
}

impl NasaPoly2 {
    const KIND: SpeciesThermoKind = SpeciesThermoKind::Nasa7TwoZone;

    pub fn new(range: SpeciesRange, coeffs: &[f64]) -> Result<Self, ConfigError> {
        check_fixed_arity(Self::KIND, coeffs)?;
        let t_mid = coeffs[0];
        if t_mid <= range.min_temp || t_mid >= range.max_temp {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "midpoint temperature must lie strictly inside the species range",
            });
        }
        let mut c = [0.0; 15];
        c.copy_from_slice(coeffs);
        Ok(Self { range, coeffs: c })
    }

    pub fn t_mid(&self) -> f64 {
        self.coeffs[0]
    }

    pub fn low_coeffs(&self) -> &[f64] {
        &self.coeffs[1..8]
    }

    pub fn high_coeffs(&self) -> &[f64] {
        &self.coeffs[8..15]
    }
}

impl SpeciesThermoInterp for NasaPoly2 {
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
        if tt.t() < self.t_mid() {
            nasa7_zone(self.low_coeffs(), tt)
        } else {
            nasa7_zone(self.high_coeffs(), tt)
        }
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        *self = Self::new(self.range, coeffs)?;
        Ok(())
    }
}
