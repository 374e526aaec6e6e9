//! Published NASA coefficient sets evaluated through the manager.

use spt_core::constants::{ONE_ATM_PA, ONE_BAR_PA};
use spt_thermo::{SpeciesThermoKind, SpeciesThermoManager};

// GRI-Mech 3.0 N2, NASA-7 two-zone: [t_mid, low(7), high(7)]
const N2: [f64; 15] = [
    1000.0,
    3.298677,
    1.4082404e-3,
    -3.963222e-6,
    5.641515e-9,
    -2.444854e-12,
    -1020.8999,
    3.950372,
    2.92664,
    1.4879768e-3,
    -5.68476e-7,
    1.0097038e-10,
    -6.753351e-15,
    -922.7977,
    5.980528,
];

fn ar_nasa9() -> Vec<f64> {
    let ar = [0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 0.0, -745.375, 4.37967491];
    let mut c = vec![2.0, 200.0, 1000.0];
    c.extend_from_slice(&ar);
    c.extend_from_slice(&[1000.0, 6000.0]);
    c.extend_from_slice(&ar);
    c
}

fn air_like() -> SpeciesThermoManager {
    let mut m = SpeciesThermoManager::new(2);
    let (two_zone, nasa9) = (
        SpeciesThermoKind::Nasa7TwoZone,
        SpeciesThermoKind::Nasa9MultiZone,
    );
    m.install("N2", 0, two_zone, &N2, 300.0, 5000.0, ONE_ATM_PA)
        .unwrap();
    m.install("AR", 1, nasa9, &ar_nasa9(), 200.0, 6000.0, ONE_BAR_PA)
        .unwrap();
    m
}

fn close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() <= tol
}

#[test]
fn n2_and_ar_at_298() {
    let m = air_like();
    let (mut cp, mut h, mut s) = ([0.0; 2], [0.0; 2], [0.0; 2]);
    m.update(298.15, &mut cp, &mut h, &mut s).unwrap();

    assert!(close(cp[0], 3.496440, 1e-5), "N2 cp_r = {}", cp[0]);
    assert!(close(h[0], 0.000577, 1e-5), "N2 h_rt = {}", h[0]);
    assert!(close(s[0], 23.033628, 1e-5), "N2 s_r = {}", s[0]);

    assert_eq!(cp[1], 2.5);
    assert!(close(h[1], 0.0, 1e-9), "Ar h_rt = {}", h[1]);
    assert!(close(s[1], 18.6237, 1e-3), "Ar s_r = {}", s[1]);
}

#[test]
fn n2_zones_meet_at_midpoint() {
    let m = air_like();
    let below = m.evaluate_one(0, 1000.0 - 1e-9).unwrap();
    let at = m.evaluate_one(0, 1000.0).unwrap();
    assert!(close(below.cp_r, at.cp_r, 1e-5));
    assert!(close(below.h_rt, at.h_rt, 1e-5));
    assert!(close(below.s_r, at.s_r, 1e-5));
    assert!(close(at.cp_r, 3.940358, 1e-5), "cp_r = {}", at.cp_r);
}

#[test]
fn n2_high_zone() {
    let m = air_like();
    let props = m.evaluate_one(0, 2000.0).unwrap();
    assert!(close(props.cp_r, 4.328399, 1e-5), "cp_r = {}", props.cp_r);
    assert!(close(props.h_rt, 3.375580, 1e-5), "h_rt = {}", props.h_rt);
    assert!(close(props.s_r, 30.306876, 1e-5), "s_r = {}", props.s_r);
}

#[test]
fn phase_window_and_reference_pressure() {
    let m = air_like();
    assert_eq!(m.min_temp(), 300.0);
    assert_eq!(m.max_temp(), 5000.0);
    assert_eq!(m.ref_pressure(), Some(ONE_ATM_PA));
    assert_eq!(m.species_ref_pressure(1), Ok(ONE_BAR_PA));
    assert_eq!(m.report_type(1), Ok(SpeciesThermoKind::Nasa9MultiZone));
    assert_eq!(m.report_params(0).unwrap().coeffs, N2.to_vec());
}
