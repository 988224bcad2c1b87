//! qrprint CLI entrypoint

use clap::Parser;
use qrprint::{GeneratorOptions, Result, generate_batch, logging, vehicle_tag};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "qrprint",
    version,
    about = "Batch QR code generator for printable fleet tags"
)]
struct Cli {
    /// Values to encode, one QR image per value
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Optional configuration file (toml). Defaults to qrprint.toml in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the output directory (takes precedence over config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Generate a fleet tag value (VEH-<id>-XXXXXXXX) for the given vehicle id; repeatable
    #[arg(long, value_name = "ID")]
    vehicle: Vec<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.values.is_empty() && cli.vehicle.is_empty() {
        println!("Usage: qrprint VALUE1 VALUE2 ... [--vehicle ID] [--output-dir DIR]");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (mut options, config_source) = GeneratorOptions::load(cli.config.as_deref())?;

    if let Some(dir) = cli.output_dir {
        options.output_dir = dir;
    }

    logging::init(&options.logging)?;

    if let Some(path) = config_source {
        tracing::info!("Using configuration file: {}", path.display());
    }

    let mut values = cli.values;
    values.extend(cli.vehicle.into_iter().map(vehicle_tag));

    generate_batch(&values, &options)?;
    Ok(())
}
