//! 9-coefficient NASA polynomials over any number of contiguous zones.

use crate::error::{ConfigError, ThermoResult};
use crate::interp::{RefStateProps, SpeciesRange, SpeciesThermoInterp, leading_count};
use crate::kind::SpeciesThermoKind;
use crate::temp_poly::TempPoly;
use spt_core::{Tolerances, ensure_all_finite, nearly_equal};

const ZONE_LEN: usize = 11;

const BOUNDARY_TOL: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-12,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Nasa9Zone {
    t_lo: f64,
    t_hi: f64,
    a: [f64; 9],
}

impl Nasa9Zone {
    fn evaluate(&self, tt: &TempPoly) -> RefStateProps {
        let a = &self.a;
        let (t, t2, t3, t4) = (tt.t(), tt.t2(), tt.t3(), tt.t4());
        let inv_t = tt.inv_t();
        let inv_t2 = inv_t * inv_t;
        let ln_t = tt.ln_t();
        RefStateProps {
            cp_r: a[0] * inv_t2
                + a[1] * inv_t
                + a[2]
                + a[3] * t
                + a[4] * t2
                + a[5] * t3
                + a[6] * t4,
            h_rt: -a[0] * inv_t2
                + a[1] * ln_t * inv_t
                + a[2]
                + a[3] * t / 2.0
                + a[4] * t2 / 3.0
                + a[5] * t3 / 4.0
                + a[6] * t4 / 5.0
                + a[7] * inv_t,
            s_r: -a[0] * inv_t2 / 2.0 - a[1] * inv_t
                + a[2] * ln_t
                + a[3] * t
                + a[4] * t2 / 2.0
                + a[5] * t3 / 3.0
                + a[6] * t4 / 4.0
                + a[8],
        }
    }
}

/// NASA-9 polynomial split into `n` zones.
///
/// Coefficients: `[n, (t_lo, t_hi, a0..a8) * n]`. Zones are ordered and
/// share boundaries. A temperature on a shared boundary is evaluated with the
/// upper zone; temperatures outside all zones use the nearest end zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Nasa9MultiZone {
    range: SpeciesRange,
    coeffs: Vec<f64>,
    zones: Vec<Nasa9Zone>,
}

impl Nasa9MultiZone {
    const KIND: SpeciesThermoKind = SpeciesThermoKind::Nasa9MultiZone;

    pub fn new(range: SpeciesRange, coeffs: &[f64]) -> Result<Self, ConfigError> {
        let n_zones = leading_count(Self::KIND, coeffs, 1)?;
        let expected = n_zones.saturating_mul(ZONE_LEN).saturating_add(1);
        if coeffs.len() != expected {
            return Err(ConfigError::CoefficientCount {
                kind: Self::KIND,
                expected,
                found: coeffs.len(),
            });
        }
        ensure_all_finite(coeffs, "coefficient")?;

        let zones: Vec<Nasa9Zone> = coeffs[1..]
            .chunks_exact(ZONE_LEN)
            .map(|chunk| {
                let mut a = [0.0; 9];
                a.copy_from_slice(&chunk[2..]);
                Nasa9Zone {
                    t_lo: chunk[0],
                    t_hi: chunk[1],
                    a,
                }
            })
            .collect();

        if zones.iter().any(|z| z.t_lo >= z.t_hi) {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "zone lower bound must be below its upper bound",
            });
        }
        if zones
            .windows(2)
            .any(|w| !nearly_equal(w[0].t_hi, w[1].t_lo, BOUNDARY_TOL))
        {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "zones must be ordered and contiguous",
            });
        }

        Ok(Self {
            range,
            coeffs: coeffs.to_vec(),
            zones,
        })
    }

    pub fn n_zones(&self) -> usize {
        self.zones.len()
    }

    /// Index of the zone used at temperature `t`.
    pub fn zone_index(&self, t: f64) -> usize {
        self.zones
            .iter()
            .rposition(|z| z.t_lo <= t)
            .unwrap_or(0)
    }
}

impl SpeciesThermoInterp for Nasa9MultiZone {
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
        self.zones[self.zone_index(tt.t())].evaluate(tt)
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        *self = Self::new(self.range, coeffs)?;
        Ok(())
    }
}
