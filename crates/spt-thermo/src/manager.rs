//! Phase-wide reference-state thermo manager.

use crate::config::{ManagerConfig, RefPressurePolicy};
use crate::error::{ThermoError, ThermoResult};
use crate::interp::{ParameterReport, RefStateProps, SpeciesThermo, SpeciesThermoInterp};
use crate::kind::SpeciesThermoKind;
use crate::record::SpeciesThermoRecord;
use crate::temp_poly::TempPoly;
use spt_core::units::{Temperature, k};
use spt_core::nearly_equal;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
struct InstalledSpecies {
    name: String,
    thermo: SpeciesThermo,
}

/// Owns one evaluator per species slot and updates `cp_R`, `h_RT`, `s_R` for
/// the whole phase from a single temperature.
///
/// The manager is *ready* once every slot in `0..n_species` is installed.
/// `install` is allowed at any time and replaces a slot atomically; `update`
/// and `update_one` require readiness.
///
/// Evaluation takes `&self` and touches nothing but the caller's buffers, so a
/// ready manager can be shared across threads for read-only use. `install` and
/// `modify_params` take `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesThermoManager {
    config: ManagerConfig,
    slots: Vec<Option<InstalledSpecies>>,
}

impl SpeciesThermoManager {
    /// Empty manager for `n_species` slots with the default configuration.
    pub fn new(n_species: usize) -> Self {
        Self::with_config(n_species, ManagerConfig::default())
    }

    pub fn with_config(n_species: usize, config: ManagerConfig) -> Self {
        Self {
            config,
            slots: vec![None; n_species],
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn n_species(&self) -> usize {
        self.slots.len()
    }

    pub fn installed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Install (or replace) the parameterization for slot `index`.
    ///
    /// On error the manager is unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn install(
        &mut self,
        name: &str,
        index: usize,
        kind: SpeciesThermoKind,
        coeffs: &[f64],
        min_temp: f64,
        max_temp: f64,
        ref_pressure: f64,
    ) -> ThermoResult<()> {
        self.check_index(index)?;
        let thermo = SpeciesThermo::new(index, kind, coeffs, min_temp, max_temp, ref_pressure)?;
        self.check_ref_pressure(index, ref_pressure)?;

        let replaced = self.slots[index]
            .replace(InstalledSpecies {
                name: name.to_owned(),
                thermo,
            })
            .is_some();
        debug!(
            species = name,
            index,
            kind = %kind,
            replaced,
            "installed species thermo"
        );
        Ok(())
    }

    pub fn install_record(&mut self, record: &SpeciesThermoRecord) -> ThermoResult<()> {
        self.install(
            &record.name,
            record.index,
            record.kind,
            &record.coeffs,
            record.min_temp,
            record.max_temp,
            record.ref_pressure,
        )
    }

    /// Compute cp/R, h/RT and s/R for every species at temperature `t`.
    ///
    /// Every slot of the three buffers is overwritten. Fails without writing
    /// anything if the manager is not ready or a buffer length differs from
    /// `n_species`.
    pub fn update(
        &self,
        t: f64,
        cp_r: &mut [f64],
        h_rt: &mut [f64],
        s_r: &mut [f64],
    ) -> ThermoResult<()> {
        self.ensure_ready()?;
        self.check_buffers(cp_r, h_rt, s_r)?;
        trace!(
            t,
            n_species = self.n_species(),
            "update reference-state properties"
        );

        let tt = TempPoly::new(t);
        for species in self.slots.iter().flatten() {
            species.thermo.update_properties(&tt, cp_r, h_rt, s_r);
        }
        Ok(())
    }

    /// Like [`update`](Self::update) but writes only slot `k`.
    pub fn update_one(
        &self,
        k: usize,
        t: f64,
        cp_r: &mut [f64],
        h_rt: &mut [f64],
        s_r: &mut [f64],
    ) -> ThermoResult<()> {
        self.check_index(k)?;
        self.ensure_ready()?;
        self.check_buffers(cp_r, h_rt, s_r)?;
        trace!(k, t, "update_one reference-state properties");

        self.slot(k)?
            .thermo
            .update_properties_temp(t, cp_r, h_rt, s_r);
        Ok(())
    }

    /// Properties of one installed species, without output buffers.
    pub fn evaluate_one(&self, k: usize, t: f64) -> ThermoResult<RefStateProps> {
        Ok(self.slot(k)?.thermo.evaluate(&TempPoly::new(t)))
    }

    /// Highest installed `min_temp`: the lower end of the window valid for
    /// every installed species. `0.0` when nothing is installed.
    pub fn min_temp(&self) -> f64 {
        if self.installed_count() == 0 {
            return 0.0;
        }
        self.installed()
            .map(|s| s.thermo.min_temp())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Lowest installed `max_temp`. `f64::INFINITY` when nothing is installed.
    pub fn max_temp(&self) -> f64 {
        self.installed()
            .map(|s| s.thermo.max_temp())
            .fold(f64::INFINITY, f64::min)
    }

    pub fn species_min_temp(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.slot(k)?.thermo.min_temp())
    }

    pub fn species_max_temp(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.slot(k)?.thermo.max_temp())
    }

    /// Common validity window as temperatures, if any species is installed.
    pub fn temperature_window(&self) -> Option<(Temperature, Temperature)> {
        (self.installed_count() > 0).then(|| (k(self.min_temp()), k(self.max_temp())))
    }

    /// Installed species whose own range excludes `t`.
    pub fn out_of_range_species(&self, t: f64) -> Vec<usize> {
        self.installed()
            .filter(|s| !s.thermo.in_range(t))
            .map(|s| s.thermo.species_index())
            .collect()
    }

    /// Reference pressure of the first installed species [Pa].
    pub fn ref_pressure(&self) -> Option<f64> {
        self.installed().next().map(|s| s.thermo.ref_pressure())
    }

    pub fn species_ref_pressure(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.slot(k)?.thermo.ref_pressure())
    }

    pub fn report_type(&self, k: usize) -> ThermoResult<SpeciesThermoKind> {
        Ok(self.slot(k)?.thermo.kind())
    }

    pub fn report_params(&self, k: usize) -> ThermoResult<ParameterReport> {
        Ok(self.slot(k)?.thermo.report_parameters())
    }

    /// Replace the coefficients of slot `k`, keeping its kind, range and
    /// reference pressure. Other slots are untouched.
    pub fn modify_params(&mut self, k: usize, coeffs: &[f64]) -> ThermoResult<()> {
        let species = self.slot_mut(k)?;
        species.thermo.modify_parameters(coeffs)?;
        debug!(
            species = %species.name,
            index = k,
            "modified species thermo coefficients"
        );
        Ok(())
    }

    /// Borrow the evaluator installed at `k`.
    pub fn thermo(&self, k: usize) -> ThermoResult<&SpeciesThermo> {
        Ok(&self.slot(k)?.thermo)
    }

    pub fn species_name(&self, k: usize) -> ThermoResult<&str> {
        Ok(&self.slot(k)?.name)
    }

    /// Slot of the first installed species called `name`.
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.installed()
            .find(|s| s.name == name)
            .map(|s| s.thermo.species_index())
    }

    pub fn record(&self, k: usize) -> ThermoResult<SpeciesThermoRecord> {
        let species = self.slot(k)?;
        Ok(SpeciesThermoRecord::from_report(
            species.name.clone(),
            species.thermo.report_parameters(),
        ))
    }

    /// Records for every installed slot, in index order.
    pub fn records(&self) -> Vec<SpeciesThermoRecord> {
        self.installed()
            .map(|s| {
                SpeciesThermoRecord::from_report(s.name.clone(), s.thermo.report_parameters())
            })
            .collect()
    }

    fn installed(&self) -> impl Iterator<Item = &InstalledSpecies> {
        self.slots.iter().flatten()
    }

    fn check_index(&self, index: usize) -> ThermoResult<()> {
        if index >= self.n_species() {
            return Err(ThermoError::IndexOutOfRange {
                index,
                n_species: self.n_species(),
            });
        }
        Ok(())
    }

    fn slot(&self, index: usize) -> ThermoResult<&InstalledSpecies> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(ThermoError::NotInstalled { index })
    }

    fn slot_mut(&mut self, index: usize) -> ThermoResult<&mut InstalledSpecies> {
        self.check_index(index)?;
        self.slots[index]
            .as_mut()
            .ok_or(ThermoError::NotInstalled { index })
    }

    pub(crate) fn ensure_ready(&self) -> ThermoResult<()> {
        let mut missing = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i);
        match missing.next() {
            None => Ok(()),
            Some(first_missing) => Err(ThermoError::NotReady {
                missing: 1 + missing.count(),
                first_missing,
            }),
        }
    }

    fn check_buffers(&self, cp_r: &[f64], h_rt: &[f64], s_r: &[f64]) -> ThermoResult<()> {
        let expected = self.n_species();
        for (what, len) in [("cp_r", cp_r.len()), ("h_rt", h_rt.len()), ("s_r", s_r.len())] {
            if len != expected {
                return Err(ThermoError::BufferLength {
                    what,
                    len,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Under [`RefPressurePolicy::Uniform`], every other installed slot must
    /// agree with `ref_pressure` within `ref_pressure_tol`.
    fn check_ref_pressure(&self, index: usize, ref_pressure: f64) -> ThermoResult<()> {
        if self.config.ref_pressure_policy != RefPressurePolicy::Uniform {
            return Ok(());
        }
        let tol = self.config.ref_pressure_tol;
        let disagreeing = self
            .installed()
            .map(|s| &s.thermo)
            .filter(|thermo| thermo.species_index() != index)
            .find(|thermo| !nearly_equal(thermo.ref_pressure(), ref_pressure, tol));
        match disagreeing {
            Some(thermo) => Err(ThermoError::InconsistentReferenceState {
                index,
                ref_pressure,
                expected: thermo.ref_pressure(),
            }),
            None => Ok(()),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nasa7_coeffs() -> impl Strategy<Value = Vec<f64>> {
        (
            2.0_f64..5.0,
            -1e-3_f64..1e-3,
            -1e-6_f64..1e-6,
            -5e4_f64..5e4,
            -10.0_f64..30.0,
        )
            .prop_map(|(a0, a1, a2, a5, a6)| vec![a0, a1, a2, 0.0, 0.0, a5, a6])
    }

    fn species_range() -> impl Strategy<Value = (f64, f64)> {
        (-100.0_f64..500.0, 600.0_f64..5000.0)
    }

    fn populated(specs: &[(Vec<f64>, (f64, f64))]) -> SpeciesThermoManager {
        let mut m = SpeciesThermoManager::new(specs.len());
        for (i, (c, (lo, hi))) in specs.iter().enumerate() {
            let name = format!("S{i}");
            m.install(&name, i, SpeciesThermoKind::Nasa7, c, *lo, *hi, 1e5)
                .unwrap();
        }
        m
    }

    proptest! {
        #[test]
        fn report_returns_installed_parameters(
            c in nasa7_coeffs(),
            (lo, hi) in species_range(),
            p in 1e3_f64..1e7,
        ) {
            let mut m = SpeciesThermoManager::new(1);
            m.install("S", 0, SpeciesThermoKind::Nasa7, &c, lo, hi, p).unwrap();
            let report = m.report_params(0).unwrap();
            prop_assert_eq!(report.kind, SpeciesThermoKind::Nasa7);
            prop_assert_eq!(report.coeffs, c);
            prop_assert_eq!(report.min_temp, lo);
            prop_assert_eq!(report.max_temp, hi);
            prop_assert_eq!(report.ref_pressure, p);
        }

        #[test]
        fn update_one_matches_update(
            specs in prop::collection::vec((nasa7_coeffs(), species_range()), 1..6),
            t in 200.0_f64..3000.0,
        ) {
            let m = populated(&specs);
            let n = specs.len();
            let (mut cp, mut h, mut s) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
            m.update(t, &mut cp, &mut h, &mut s).unwrap();

            for k in 0..n {
                let mut cp1 = vec![f64::NAN; n];
                let mut h1 = vec![f64::NAN; n];
                let mut s1 = vec![f64::NAN; n];
                m.update_one(k, t, &mut cp1, &mut h1, &mut s1).unwrap();
                prop_assert_eq!(cp1[k].to_bits(), cp[k].to_bits());
                prop_assert_eq!(h1[k].to_bits(), h[k].to_bits());
                prop_assert_eq!(s1[k].to_bits(), s[k].to_bits());
                for j in (0..n).filter(|&j| j != k) {
                    prop_assert!(cp1[j].is_nan() && h1[j].is_nan() && s1[j].is_nan());
                }
            }
        }

        #[test]
        fn window_is_max_min_and_min_max(
            specs in prop::collection::vec((nasa7_coeffs(), species_range()), 1..6),
        ) {
            let m = populated(&specs);
            let lo = specs.iter().map(|(_, (lo, _))| *lo).fold(f64::MIN, f64::max);
            let hi = specs.iter().map(|(_, (_, hi))| *hi).fold(f64::MAX, f64::min);
            prop_assert_eq!(m.min_temp(), lo);
            prop_assert_eq!(m.max_temp(), hi);
        }

        #[test]
        fn modify_changes_only_its_slot(
            specs in prop::collection::vec((nasa7_coeffs(), species_range()), 2..6),
            replacement in nasa7_coeffs(),
            pick in any::<prop::sample::Index>(),
            t in 200.0_f64..3000.0,
        ) {
            let mut m = populated(&specs);
            let n = specs.len();
            let k = pick.index(n);
            let (mut cp0, mut h0, mut s0) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
            m.update(t, &mut cp0, &mut h0, &mut s0).unwrap();

            m.modify_params(k, &replacement).unwrap();
            let (mut cp1, mut h1, mut s1) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
            m.update(t, &mut cp1, &mut h1, &mut s1).unwrap();

            for j in (0..n).filter(|&j| j != k) {
                prop_assert_eq!(cp1[j].to_bits(), cp0[j].to_bits());
                prop_assert_eq!(h1[j].to_bits(), h0[j].to_bits());
                prop_assert_eq!(s1[j].to_bits(), s0[j].to_bits());
            }
            let expected = m.evaluate_one(k, t).unwrap();
            prop_assert_eq!(cp1[k], expected.cp_r);
            prop_assert_eq!(m.report_params(k).unwrap().coeffs, replacement);
        }
    }
}
