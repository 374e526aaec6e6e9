mod data;
mod error;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use spt_core::units::pa;
use spt_thermo::{SpeciesThermoInterp, SpeciesThermoManager, SweepSpacing, TemperatureSweep};
use std::path::{Path, PathBuf};
use uom::si::pressure::bar;
use uom::si::thermodynamic_temperature::kelvin;

#[derive(Parser)]
#[command(name = "spt-cli")]
#[command(about = "Species reference-state thermo evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install every species and report readiness and the common window
    Check {
        /// Path to the species YAML file
        path: PathBuf,
    },
    /// Evaluate all species at one temperature
    Eval {
        /// Path to the species YAML file
        path: PathBuf,
        /// Temperature in K
        #[arg(short, long)]
        temperature: f64,
    },
    /// Evaluate a temperature sweep and print CSV
    Sweep {
        /// Path to the species YAML file
        path: PathBuf,
        /// Start temperature in K (defaults to the common window)
        #[arg(long)]
        start: Option<f64>,
        /// End temperature in K (defaults to the common window)
        #[arg(long)]
        end: Option<f64>,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Only print this species
        #[arg(long)]
        species: Option<String>,
    },
    /// Show installed parameters for one species
    Report {
        /// Path to the species YAML file
        path: PathBuf,
        /// Species name
        species: String,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => cmd_check(&path),
        Commands::Eval { path, temperature } => cmd_eval(&path, temperature),
        Commands::Sweep {
            path,
            start,
            end,
            points,
            log,
            species,
        } => cmd_sweep(&path, start, end, points, log, species.as_deref()),
        Commands::Report { path, species } => cmd_report(&path, &species),
    }
}

fn cmd_check(path: &Path) -> CliResult<()> {
    println!("Checking species file: {}", path.display());
    let manager = data::load_manager(path)?;
    println!(
        "✓ {} of {} species installed",
        manager.installed_count(),
        manager.n_species()
    );

    if let Some((lo, hi)) = manager.temperature_window() {
        let (lo, hi) = (lo.get::<kelvin>(), hi.get::<kelvin>());
        if lo < hi {
            println!("  Common window: {lo} - {hi} K");
        } else {
            println!("  ⚠ Species ranges do not overlap ({lo} K > {hi} K)");
        }
    }
    if let Some(p) = manager.ref_pressure() {
        println!("  Reference pressure: {} bar", pa(p).get::<bar>());
    }
    for k in 0..manager.n_species() {
        let thermo = manager.thermo(k)?;
        println!(
            "  [{k}] {} ({}) {} - {} K",
            manager.species_name(k)?,
            thermo.kind(),
            thermo.min_temp(),
            thermo.max_temp()
        );
    }
    Ok(())
}

fn cmd_eval(path: &Path, t: f64) -> CliResult<()> {
    let manager = data::load_manager(path)?;
    let n = manager.n_species();
    let (mut cp, mut h, mut s) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
    manager.update(t, &mut cp, &mut h, &mut s)?;

    let outside = manager.out_of_range_species(t);
    println!("T = {t} K");
    println!(
        "  {:<12} {:>12} {:>12} {:>12} {:>12}",
        "species", "cp/R", "h/RT", "s/R", "g/RT"
    );
    for k in 0..n {
        let marker = if outside.contains(&k) { " *" } else { "" };
        println!(
            "  {:<12} {:>12.6} {:>12.6} {:>12.6} {:>12.6}{marker}",
            manager.species_name(k)?,
            cp[k],
            h[k],
            s[k],
            h[k] - s[k]
        );
    }
    if !outside.is_empty() {
        println!("  * extrapolated outside the species' valid range");
    }
    Ok(())
}

fn cmd_sweep(
    path: &Path,
    start: Option<f64>,
    end: Option<f64>,
    points: usize,
    log: bool,
    species: Option<&str>,
) -> CliResult<()> {
    let manager = data::load_manager(path)?;
    let spacing = if log {
        SweepSpacing::Logarithmic
    } else {
        SweepSpacing::Linear
    };
    let sweep = TemperatureSweep::new(
        start.unwrap_or(manager.min_temp()),
        end.unwrap_or(manager.max_temp()),
        points,
        spacing,
    )?;

    let selected = match species {
        Some(name) => vec![find_species(&manager, name)?],
        None => (0..manager.n_species()).collect(),
    };

    let table = manager.sweep(&sweep)?;
    let mut csv = String::from("t_k");
    for &k in &selected {
        let name = &table.species_names[k];
        csv.push_str(&format!(",{name}_cp_r,{name}_h_rt,{name}_s_r"));
    }
    csv.push('\n');
    for row in &table.rows {
        csv.push_str(&format!("{}", row.t));
        for &k in &selected {
            csv.push_str(&format!(",{},{},{}", row.cp_r[k], row.h_rt[k], row.s_r[k]));
        }
        csv.push('\n');
    }
    print!("{csv}");
    Ok(())
}

fn cmd_report(path: &Path, species: &str) -> CliResult<()> {
    let manager = data::load_manager(path)?;
    let k = find_species(&manager, species)?;
    let report = manager.report_params(k)?;

    println!("{species} (index {})", report.index);
    println!("  Kind: {} (code {})", report.kind, report.kind.code());
    println!("  Range: {} - {} K", report.min_temp, report.max_temp);
    println!("  Reference pressure: {} Pa", report.ref_pressure);
    println!("  Coefficients ({}):", report.coeffs.len());
    for (i, c) in report.coeffs.iter().enumerate() {
        println!("    [{i:>2}] {c:e}");
    }
    Ok(())
}

fn find_species(manager: &SpeciesThermoManager, name: &str) -> CliResult<usize> {
    manager
        .species_index(name)
        .ok_or_else(|| CliError::SpeciesNotFound(name.to_string()))
}
