//! End-to-end manager behavior through the public API.

use spt_core::constants::{ONE_ATM_PA, ONE_BAR_PA};
use spt_thermo::{
    ManagerConfig, SpeciesThermoKind, SpeciesThermoManager, SpeciesThermoSet, ThermoError,
};

fn buffers(n: usize, fill: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    (vec![fill; n], vec![fill; n], vec![fill; n])
}

fn two_zone_coeffs(low_cp: f64, high_cp: f64) -> Vec<f64> {
    let mut c = vec![1000.0];
    c.extend_from_slice(&[low_cp, 0.0, 0.0, 0.0, 0.0, -500.0, 2.0]);
    c.extend_from_slice(&[high_cp, 0.0, 0.0, 0.0, 0.0, -800.0, 1.0]);
    c
}

const ARGON_LIKE: [f64; 4] = [298.15, 0.0, 20.0, 2.5];

fn install_const_cp(
    m: &mut SpeciesThermoManager,
    name: &str,
    index: usize,
    p: f64,
) -> Result<(), ThermoError> {
    let kind = SpeciesThermoKind::ConstCp;
    m.install(name, index, kind, &ARGON_LIKE, 200.0, 2000.0, p)
}

fn install_two_zone(m: &mut SpeciesThermoManager, name: &str, index: usize, coeffs: &[f64]) {
    m.install(
        name,
        index,
        SpeciesThermoKind::Nasa7TwoZone,
        coeffs,
        200.0,
        3500.0,
        ONE_BAR_PA,
    )
    .unwrap();
}

fn mixed_manager() -> SpeciesThermoManager {
    let mut m = SpeciesThermoManager::new(3);
    m.install(
        "X",
        0,
        SpeciesThermoKind::ConstCp,
        &[298.15, 100.0, 25.0, 3.5],
        200.0,
        2000.0,
        ONE_BAR_PA,
    )
    .unwrap();
    install_two_zone(&mut m, "Y", 1, &two_zone_coeffs(3.0, 4.0));
    m.install(
        "Z",
        2,
        SpeciesThermoKind::Mu0Interp,
        &[2.0, 0.0, 298.15, -5000.0, 1000.0, -20000.0],
        200.0,
        2000.0,
        ONE_BAR_PA,
    )
    .unwrap();
    m
}

#[test]
fn constant_cp_closed_form() {
    let (t0, h0, s0, cp) = (298.15, 1200.0, 22.0, 3.5);
    let mut m = SpeciesThermoManager::new(1);
    let kind = SpeciesThermoKind::ConstCp;
    m.install("A", 0, kind, &[t0, h0, s0, cp], 200.0, 2000.0, 100_000.0)
        .unwrap();

    let (mut c, mut h, mut s) = buffers(1, 0.0);
    m.update(298.15, &mut c, &mut h, &mut s).unwrap();
    assert_eq!(c[0], 3.5);
    assert!((h[0] - h0 / 298.15).abs() < 1e-12);
    assert!((s[0] - s0).abs() < 1e-12);

    let t = 1500.0_f64;
    m.update(t, &mut c, &mut h, &mut s).unwrap();
    assert!((h[0] - (h0 + cp * (t - t0)) / t).abs() < 1e-12);
    assert!((s[0] - (s0 + cp * (t / t0).ln())).abs() < 1e-12);
}

#[test]
fn two_zone_switch_at_break_temperature() {
    let mut m = SpeciesThermoManager::new(1);
    install_two_zone(&mut m, "A", 0, &two_zone_coeffs(3.0, 4.0));

    let (mut c, mut h, mut s) = buffers(1, 0.0);
    for (t, expected) in [(999.99, 3.0), (1000.0, 4.0), (1000.01, 4.0)] {
        m.update(t, &mut c, &mut h, &mut s).unwrap();
        assert_eq!(c[0], expected, "T = {t}");
    }
}

#[test]
fn out_of_bounds_install_leaves_slots_identical() {
    let mut m = mixed_manager();
    let before = m.records();
    let err = install_const_cp(&mut m, "W", 3, ONE_BAR_PA).unwrap_err();
    assert_eq!(
        err,
        ThermoError::IndexOutOfRange {
            index: 3,
            n_species: 3
        }
    );
    assert_eq!(m.records(), before);
}

#[test]
fn modify_params_only_affects_its_slot() {
    let mut m = mixed_manager();
    let temps = [250.0, 298.15, 999.99, 1000.0, 1750.0, 4000.0];
    let baseline: Vec<_> = temps
        .iter()
        .map(|&t| {
            let (mut c, mut h, mut s) = buffers(3, 0.0);
            m.update(t, &mut c, &mut h, &mut s).unwrap();
            (c, h, s)
        })
        .collect();

    m.modify_params(1, &two_zone_coeffs(3.3, 4.4)).unwrap();

    for (&t, (c0, h0, s0)) in temps.iter().zip(&baseline) {
        let (mut c, mut h, mut s) = buffers(3, 0.0);
        m.update(t, &mut c, &mut h, &mut s).unwrap();
        for j in [0, 2] {
            assert_eq!(c[j].to_bits(), c0[j].to_bits());
            assert_eq!(h[j].to_bits(), h0[j].to_bits());
            assert_eq!(s[j].to_bits(), s0[j].to_bits());
        }
        assert_ne!(c[1], c0[1]);
    }
}

#[test]
fn not_ready_update_writes_nothing() {
    let mut m = SpeciesThermoManager::new(3);
    install_const_cp(&mut m, "X", 0, ONE_BAR_PA).unwrap();
    install_const_cp(&mut m, "Z", 2, ONE_BAR_PA).unwrap();

    let (mut c, mut h, mut s) = buffers(3, -1.0);
    let err = m.update(500.0, &mut c, &mut h, &mut s).unwrap_err();
    assert_eq!(
        err,
        ThermoError::NotReady {
            missing: 1,
            first_missing: 1
        }
    );
    assert!(c.iter().chain(&h).chain(&s).all(|&v| v == -1.0));
}

#[test]
fn uniform_reference_pressure_policy() {
    let mut m = SpeciesThermoManager::with_config(2, ManagerConfig::uniform_ref_pressure());
    install_const_cp(&mut m, "X", 0, ONE_ATM_PA).unwrap();
    let err = install_const_cp(&mut m, "Y", 1, ONE_BAR_PA).unwrap_err();
    assert!(matches!(
        err,
        ThermoError::InconsistentReferenceState { index: 1, .. }
    ));

    // Default policy accepts mixed reference pressures.
    let mut m = SpeciesThermoManager::new(2);
    install_const_cp(&mut m, "X", 0, ONE_ATM_PA).unwrap();
    install_const_cp(&mut m, "Y", 1, ONE_BAR_PA).unwrap();
    assert_eq!(m.ref_pressure(), Some(ONE_ATM_PA));
}

#[test]
fn extrapolation_is_silent() {
    let m = mixed_manager();
    let (mut c, mut h, mut s) = buffers(3, 0.0);
    m.update(50.0, &mut c, &mut h, &mut s).unwrap();
    m.update(6000.0, &mut c, &mut h, &mut s).unwrap();
    assert!(c.iter().chain(&h).chain(&s).all(|v| v.is_finite()));
    assert_eq!(m.out_of_range_species(6000.0), vec![0, 1, 2]);
}

#[test]
fn set_round_trip_rebuilds_equal_manager() {
    let m = mixed_manager();
    let set = SpeciesThermoSet::from_manager(&m);
    assert_eq!(set.species.len(), 3);
    let rebuilt = set.build_manager().unwrap();
    assert_eq!(rebuilt, m);
    assert!(rebuilt.is_ready());
}

#[test]
fn window_lower_bound_can_be_negative() {
    let mut m = SpeciesThermoManager::new(2);
    let kind = SpeciesThermoKind::Nasa7;
    let coeffs = [3.5, 0.0, 0.0, 0.0, 0.0, -1000.0, 4.0];
    m.install("A", 0, kind, &coeffs, -50.0, 1000.0, ONE_BAR_PA)
        .unwrap();
    assert_eq!(m.species_min_temp(0), Ok(-50.0));
    assert_eq!(m.min_temp(), -50.0);

    m.install("B", 1, kind, &coeffs, -120.0, 800.0, ONE_BAR_PA)
        .unwrap();
    assert_eq!(m.min_temp(), -50.0);
    assert_eq!(m.max_temp(), 800.0);
}
