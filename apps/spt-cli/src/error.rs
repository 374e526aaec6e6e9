use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read species file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Thermo error: {0}")]
    Thermo(#[from] spt_thermo::ThermoError),

    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    #[error("Species file contains no species")]
    Empty,
}

pub type CliResult<T> = Result<T, CliError>;
