//! Parameterization family tags.
//!
//! The tag is shared with whatever layer produces coefficients, so both the
//! integer codes and the string keys are stable. Adding a family means adding
//! a variant here, bumping [`KIND_TABLE_VERSION`], and registering the
//! constructor in [`crate::SpeciesThermo::new`].

use std::fmt;

/// Version of the family table. Bumped whenever a variant is added.
pub const KIND_TABLE_VERSION: u32 = 1;

/// Parameterization family of a species reference-state fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpeciesThermoKind {
    /// Constant heat capacity: `[t0, h0/R, s0/R, cp/R]`
    ConstCp,
    /// Piecewise-linear standard chemical potential:
    /// `[n, h298/R, T_0, mu0_0/R, ..., T_{n-1}, mu0_{n-1}/R]`
    Mu0Interp,
    /// Single-zone 7-coefficient NASA polynomial: `[a0..a6]`
    Nasa7,
    /// Two-zone 7-coefficient NASA polynomial: `[t_mid, low a0..a6, high a0..a6]`
    Nasa7TwoZone,
    /// Multi-zone 9-coefficient NASA polynomial: `[n, (t_lo, t_hi, a0..a8) * n]`
    Nasa9MultiZone,
}

impl SpeciesThermoKind {
    pub const ALL: [SpeciesThermoKind; 5] = [
        SpeciesThermoKind::ConstCp,
        SpeciesThermoKind::Mu0Interp,
        SpeciesThermoKind::Nasa7,
        SpeciesThermoKind::Nasa7TwoZone,
        SpeciesThermoKind::Nasa9MultiZone,
    ];

    /// Stable integer code.
    pub fn code(&self) -> u32 {
        match self {
            SpeciesThermoKind::ConstCp => 1,
            SpeciesThermoKind::Mu0Interp => 2,
            SpeciesThermoKind::Nasa7 => 4,
            SpeciesThermoKind::Nasa7TwoZone => 5,
            SpeciesThermoKind::Nasa9MultiZone => 9,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Stable string key.
    pub fn key(&self) -> &'static str {
        match self {
            SpeciesThermoKind::ConstCp => "const_cp",
            SpeciesThermoKind::Mu0Interp => "mu0_interp",
            SpeciesThermoKind::Nasa7 => "nasa7",
            SpeciesThermoKind::Nasa7TwoZone => "nasa7_two_zone",
            SpeciesThermoKind::Nasa9MultiZone => "nasa9_multi_zone",
        }
    }

    /// Coefficient count for fixed-layout families.
    ///
    /// `None` for families whose length is encoded in the first coefficient.
    pub fn fixed_arity(&self) -> Option<usize> {
        match self {
            SpeciesThermoKind::ConstCp => Some(4),
            SpeciesThermoKind::Nasa7 => Some(7),
            SpeciesThermoKind::Nasa7TwoZone => Some(15),
            SpeciesThermoKind::Mu0Interp | SpeciesThermoKind::Nasa9MultiZone => None,
        }
    }
}

impl fmt::Display for SpeciesThermoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SpeciesThermoKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or("unknown species thermo kind")
    }
}
