//! Serializable coefficient records.
//!
//! A record carries exactly the arguments of
//! [`SpeciesThermoManager::install`](crate::SpeciesThermoManager::install).
//! Producing records (database readers, fitting tools) happens outside this crate.

use crate::config::ManagerConfig;
use crate::error::ThermoResult;
use crate::interp::ParameterReport;
use crate::kind::SpeciesThermoKind;
use crate::manager::SpeciesThermoManager;

/// One species' parameterization, as installed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesThermoRecord {
    pub name: String,
    pub index: usize,
    pub kind: SpeciesThermoKind,
    pub coeffs: Vec<f64>,
    /// [K]
    pub min_temp: f64,
    /// [K]
    pub max_temp: f64,
    /// [Pa]
    pub ref_pressure: f64,
}

impl SpeciesThermoRecord {
    pub fn from_report(name: impl Into<String>, report: ParameterReport) -> Self {
        Self {
            name: name.into(),
            index: report.index,
            kind: report.kind,
            coeffs: report.coeffs,
            min_temp: report.min_temp,
            max_temp: report.max_temp,
            ref_pressure: report.ref_pressure,
        }
    }

    pub fn to_report(&self) -> ParameterReport {
        ParameterReport {
            index: self.index,
            kind: self.kind,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            ref_pressure: self.ref_pressure,
            coeffs: self.coeffs.clone(),
        }
    }
}

/// A manager configuration together with the records for every species.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesThermoSet {
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: ManagerConfig,
    pub species: Vec<SpeciesThermoRecord>,
}

impl SpeciesThermoSet {
    /// Build a manager sized to the record count and install every record.
    pub fn build_manager(&self) -> ThermoResult<SpeciesThermoManager> {
        let mut manager = SpeciesThermoManager::with_config(self.species.len(), self.config);
        for record in &self.species {
            manager.install_record(record)?;
        }
        Ok(manager)
    }

    /// Capture every installed species of `manager`.
    pub fn from_manager(manager: &SpeciesThermoManager) -> Self {
        Self {
            config: *manager.config(),
            species: manager.records(),
        }
    }
}
