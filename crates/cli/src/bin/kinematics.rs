use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use spacecraft_kinematics::config::{ParameterValue, RawParameters, load_parameters};
use spacecraft_kinematics::export::{self, json, text};
use spacecraft_kinematics::kinematics::compute;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Velocity, distance and fuel after one elapsed interval"
)]
struct Cli {
    /// Parameter manifest (TOML or YAML); omitted fields use the reference scenario
    #[arg(long)]
    params: Option<PathBuf>,

    /// Initial velocity in km/h
    #[arg(long, allow_hyphen_values = true)]
    velocity: Option<ParameterValue>,

    /// Acceleration in m/s²
    #[arg(long, allow_hyphen_values = true)]
    acceleration: Option<ParameterValue>,

    /// Elapsed time in seconds
    #[arg(long, allow_hyphen_values = true)]
    time: Option<ParameterValue>,

    /// Initial distance in km
    #[arg(long, allow_hyphen_values = true)]
    initial_distance: Option<ParameterValue>,

    /// Fuel on board in kg
    #[arg(long, allow_hyphen_values = true)]
    remaining_fuel: Option<ParameterValue>,

    /// Fuel burn rate in kg/s
    #[arg(long, allow_hyphen_values = true)]
    burn_rate: Option<ParameterValue>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report destination (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", single_line(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let manifest = match &cli.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("unable to load {}", path.display()))?,
        None => RawParameters::default(),
    };
    let overrides = RawParameters {
        velocity_km_h: cli.velocity,
        acceleration_m_s2: cli.acceleration,
        time_s: cli.time,
        initial_distance_km: cli.initial_distance,
        remaining_fuel_kg: cli.remaining_fuel,
        fuel_burn_rate_kg_s: cli.burn_rate,
    };

    let params = manifest.apply(overrides).validate()?;
    info!(format = ?cli.format, "computing interval");
    let result = compute(&params)?;

    let mut writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("unable to open {}", cli.output.display()))?;
    match cli.format {
        Format::Text => text::write_report(writer.as_mut(), &result)?,
        Format::Json => json::write_report(writer.as_mut(), &params, &result)?,
    }
    writer.flush()?;
    Ok(())
}

/// Collapse multi-line parser diagnostics so the error report stays on one line.
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
