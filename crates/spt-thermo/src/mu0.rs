//! Piecewise-linear standard chemical potential.

use crate::error::{ConfigError, ThermoResult};
use crate::interp::{RefStateProps, SpeciesRange, SpeciesThermoInterp, leading_count};
use crate::kind::SpeciesThermoKind;
use crate::temp_poly::TempPoly;
use spt_core::constants::T_REF_K;
use spt_core::ensure_all_finite;

/// Distance from 298.15 K within which a node counts as the reference node.
const T_REF_TOL: f64 = 1e-3;

/// Reference-state thermo from tabulated `mu0(T)` nodes.
///
/// Coefficients: `[n, h298/R, T_0, mu0_0/R, ..., T_{n-1}, mu0_{n-1}/R]` with
/// strictly increasing node temperatures, one of which is 298.15 K. Between
/// adjacent nodes cp is constant and chosen so that `mu0 = h - T s` holds at
/// both nodes; enthalpy and entropy are continuous across nodes.
///
/// Interval `j` covers `[T_j, T_{j+1})`; a node temperature is evaluated with
/// the interval that starts there. Outside the tabulated nodes the first or
/// last interval extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mu0Poly {
    range: SpeciesRange,
    coeffs: Vec<f64>,
    t_node: Vec<f64>,
    h_r_node: Vec<f64>,
    s_r_node: Vec<f64>,
    /// cp/R of interval `j` (the last entry repeats the final interval).
    cp_r_int: Vec<f64>,
}

impl Mu0Poly {
    const KIND: SpeciesThermoKind = SpeciesThermoKind::Mu0Interp;

    pub fn new(range: SpeciesRange, coeffs: &[f64]) -> Result<Self, ConfigError> {
        let n = leading_count(Self::KIND, coeffs, 2)?;
        let expected = n.saturating_mul(2).saturating_add(2);
        if coeffs.len() != expected {
            return Err(ConfigError::CoefficientCount {
                kind: Self::KIND,
                expected,
                found: coeffs.len(),
            });
        }
        ensure_all_finite(coeffs, "coefficient")?;

        let h298_r = coeffs[1];
        let (t_node, mu_r): (Vec<f64>, Vec<f64>) =
            coeffs[2..].chunks_exact(2).map(|p| (p[0], p[1])).unzip();

        if t_node.iter().any(|&t| t <= 0.0) || t_node.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "node temperatures must be positive and strictly increasing",
            });
        }
        let Some(i_ref) = t_node.iter().position(|&t| (t - T_REF_K).abs() < T_REF_TOL) else {
            return Err(ConfigError::InvalidCoefficients {
                kind: Self::KIND,
                what: "a node at 298.15 K is required",
            });
        };

        let mut h_r = vec![0.0; n];
        let mut s_r = vec![0.0; n];
        let mut cp_r = vec![0.0; n];
        h_r[i_ref] = h298_r;
        s_r[i_ref] = (h298_r - mu_r[i_ref]) / t_node[i_ref];

        for i in i_ref..n - 1 {
            let cp = interval_cp(t_node[i], t_node[i + 1], mu_r[i], mu_r[i + 1], s_r[i]);
            cp_r[i] = cp;
            cp_r[i + 1] = cp;
            h_r[i + 1] = h_r[i] + cp * (t_node[i + 1] - t_node[i]);
            s_r[i + 1] = s_r[i] + cp * (t_node[i + 1] / t_node[i]).ln();
        }
        for i in (1..=i_ref).rev() {
            let cp = interval_cp(t_node[i], t_node[i - 1], mu_r[i], mu_r[i - 1], s_r[i]);
            cp_r[i - 1] = cp;
            h_r[i - 1] = h_r[i] + cp * (t_node[i - 1] - t_node[i]);
            s_r[i - 1] = s_r[i] + cp * (t_node[i - 1] / t_node[i]).ln();
        }

        Ok(Self {
            range,
            coeffs: coeffs.to_vec(),
            t_node,
            h_r_node: h_r,
            s_r_node: s_r,
            cp_r_int: cp_r,
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.t_node.len()
    }

    /// Interval used at temperature `t`.
    pub fn interval_index(&self, t: f64) -> usize {
        let last = self.t_node.len() - 2;
        self.t_node
            .iter()
            .rposition(|&tn| tn <= t)
            .map_or(0, |j| j.min(last))
    }
}

/// Constant cp/R between a known node (t1, mu1, s1) and the next node (t2, mu2).
fn interval_cp(t1: f64, t2: f64, mu1: f64, mu2: f64, s1: f64) -> f64 {
    let d_mu = mu2 - mu1;
    let d_t = t2 - t1;
    (d_mu - t1 * s1 + t2 * s1) / (d_t - t2 * (t2 / t1).ln())
}

impl SpeciesThermoInterp for Mu0Poly {
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
        let j = self.interval_index(tt.t());
        let t_j = self.t_node[j];
        let cp = self.cp_r_int[j];
        RefStateProps {
            cp_r: cp,
            h_rt: (self.h_r_node[j] + cp * (tt.t() - t_j)) * tt.inv_t(),
            s_r: self.s_r_node[j] + cp * (tt.ln_t() - t_j.ln()),
        }
    }

    fn modify_parameters(&mut self, coeffs: &[f64]) -> ThermoResult<()> {
        *self = Self::new(self.range, coeffs)?;
        Ok(())
    }
}
