//! Species file loading.

use crate::error::{CliError, CliResult};
use spt_thermo::{SpeciesThermoManager, SpeciesThermoSet};
use std::path::Path;

pub fn load_set(path: &Path) -> CliResult<SpeciesThermoSet> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_set(&content)
}

pub fn parse_set(content: &str) -> CliResult<SpeciesThermoSet> {
    let set: SpeciesThermoSet = serde_yaml::from_str(content)?;
    if set.species.is_empty() {
        return Err(CliError::Empty);
    }
    Ok(set)
}

pub fn load_manager(path: &Path) -> CliResult<SpeciesThermoManager> {
    let set = load_set(path)?;
    let manager = set.build_manager()?;
    tracing::info!(
        path = %path.display(),
        n_species = manager.n_species(),
        "loaded species thermo"
    );
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spt_thermo::{RefPressurePolicy, SpeciesThermoKind};

    const AIR: &str = include_str!("../data/air.yaml");

    #[test]
    fn bundled_air_file_builds_ready_manager() {
        let set = parse_set(AIR).unwrap();
        let policy = set.config.ref_pressure_policy;
        assert_eq!(policy, RefPressurePolicy::PerSpecies);
        let manager = set.build_manager().unwrap();
        assert!(manager.is_ready());
        assert_eq!(manager.species_index("N2"), Some(0));
        let kind = manager.report_type(1).unwrap();
        assert_eq!(kind, SpeciesThermoKind::Nasa9MultiZone);
        assert_eq!(manager.min_temp(), 300.0);
        assert_eq!(manager.max_temp(), 1000.0);
    }

    #[test]
    fn set_survives_yaml_round_trip() {
        let set = parse_set(AIR).unwrap();
        let yaml = serde_yaml::to_string(&set).unwrap();
        assert_eq!(parse_set(&yaml).unwrap(), set);
    }

    #[test]
    fn kind_is_written_by_key() {
        let yaml = r#"
config:
  ref_pressure_policy: uniform
species:
  - name: A
    index: 0
    kind: const_cp
    coeffs: [298.15, 0.0, 20.0, 2.5]
    min_temp: 200.0
    max_temp: 2000.0
    ref_pressure: 100000.0
"#;
        let set = parse_set(yaml).unwrap();
        assert_eq!(set.config.ref_pressure_policy, RefPressurePolicy::Uniform);
        assert_eq!(set.config.ref_pressure_tol.abs, 1e-6);
        assert_eq!(set.species[0].kind, SpeciesThermoKind::ConstCp);
    }

    #[test]
    fn rejects_empty_and_unknown_kind() {
        assert!(matches!(parse_set("species: []"), Err(CliError::Empty)));
        let yaml = r#"
species:
  - name: A
    index: 0
    kind: shomate
    coeffs: []
    min_temp: 1.0
    max_temp: 2.0
    ref_pressure: 1.0
"#;
        assert!(matches!(parse_set(yaml), Err(CliError::Yaml(_))));
    }
}
