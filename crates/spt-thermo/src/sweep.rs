//! Temperature sweeps over a ready manager.
//!
//! Produces property tables for plots and comparison against reference data.

use crate::error::{ThermoError, ThermoResult};
use crate::manager::SpeciesThermoManager;
use rayon::prelude::*;
use std::fmt;

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Uniform in ln T
    Logarithmic,
}

/// Validated temperature sweep [K].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSweep {
    start: f64,
    end: f64,
    num_points: usize,
    spacing: SweepSpacing,
}

impl TemperatureSweep {
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> ThermoResult<Self> {
        if num_points < 2 {
            return Err(ThermoError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if !start.is_finite() || !end.is_finite() || start <= 0.0 || end <= 0.0 {
            return Err(ThermoError::InvalidSweep {
                what: "sweep bounds must be finite and positive",
            });
        }
        if start == end {
            return Err(ThermoError::InvalidSweep {
                what: "start and end temperatures must be different",
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    /// Sweep spanning the manager's common validity window.
    pub fn across_window(
        manager: &SpeciesThermoManager,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> ThermoResult<Self> {
        if manager.installed_count() == 0 {
            return Err(ThermoError::InvalidSweep {
                what: "no species installed",
            });
        }
        let (lo, hi) = (manager.min_temp(), manager.max_temp());
        if lo >= hi {
            return Err(ThermoError::InvalidSweep {
                what: "species ranges have no common window",
            });
        }
        Self::new(lo, hi, num_points, spacing)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn spacing(&self) -> SweepSpacing {
        self.spacing
    }

    /// All sweep temperatures, first to last. The last point equals `end` exactly.
    pub fn points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points: Vec<f64> = match self.spacing {
            SweepSpacing::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepSpacing::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };
        points[0] = self.start;
        points[n - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

impl fmt::Display for TemperatureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T from {} K to {} K ({} points, {})",
            self.start, self.end, self.num_points, self.spacing
        )
    }
}

/// Properties of every species at one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    /// [K]
    pub t: f64,
    pub cp_r: Vec<f64>,
    pub h_rt: Vec<f64>,
    pub s_r: Vec<f64>,
}

/// Sweep output: one row per point, in point order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    pub species_names: Vec<String>,
    pub rows: Vec<PropertyRow>,
}

impl PropertyTable {
    /// `(t, cp_r, h_rt, s_r)` for species `k` across all rows.
    pub fn species_series(&self, k: usize) -> ThermoResult<Vec<(f64, f64, f64, f64)>> {
        let n_species = self.species_names.len();
        if k >= n_species {
            return Err(ThermoError::IndexOutOfRange {
                index: k,
                n_species,
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|r| (r.t, r.cp_r[k], r.h_rt[k], r.s_r[k]))
            .collect())
    }
}

impl SpeciesThermoManager {
    /// Evaluate every species at each sweep point.
    ///
    /// Points are evaluated in parallel; the manager is only read.
    pub fn sweep(&self, sweep: &TemperatureSweep) -> ThermoResult<PropertyTable> {
        self.ensure_ready()?;
        let n = self.n_species();
        let species_names = (0..n)
            .map(|k| self.species_name(k).map(str::to_owned))
            .collect::<ThermoResult<Vec<_>>>()?;

        let rows = sweep
            .points()
            .into_par_iter()
            .map(|t| {
                let mut row = PropertyRow {
                    t,
                    cp_r: vec![0.0; n],
                    h_rt: vec![0.0; n],
                    s_r: vec![0.0; n],
                };
                self.update(t, &mut row.cp_r, &mut row.h_rt, &mut row.s_r)?;
                Ok(row)
            })
            .collect::<ThermoResult<Vec<_>>>()?;

        tracing::debug!(%sweep, n_species = n, "completed temperature sweep");
        Ok(PropertyTable {
            species_names,
            rows,
        })
    }
}
