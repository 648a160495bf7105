//! co2-calculator CLI
//!
//! Prints the CO2-equivalent caused by travelling between two cities with a
//! given transport method.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::error::ApplicationError;
use application::services::TripCalculator;
use clap::Parser;
use domain::value_objects::{Co2Mass, TransportMethod};
use infrastructure::{AppConfig, OrsDistanceAdapter};
use secrecy::SecretString;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, log_filter_from_verbosity};

/// Exit status for bad input or configuration
const EXIT_USAGE: u8 = 2;
/// Exit status when the distance service could not be reached
const EXIT_TRANSPORT: u8 = 3;
/// Exit status when the distance service answered with an unusable payload
const EXIT_RESOLUTION: u8 = 4;

/// Set up logging on stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_methods() {
    for method in TransportMethod::ALL {
        println!("{:<20} {} g/km", method.key(), method.grams_per_km());
    }
}

/// Map a failure to the process exit status
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ApplicationError>() {
        Some(err) if err.is_user_error() => EXIT_USAGE,
        Some(ApplicationError::Transport { .. }) => EXIT_TRANSPORT,
        Some(ApplicationError::Resolution(_)) => EXIT_RESOLUTION,
        Some(_) | None => EXIT_USAGE,
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    }
    .with_token_override(cli.ors_token.clone().map(SecretString::from));

    config.validate().map_err(ApplicationError::Configuration)?;
    debug!(?config, "Using configuration");
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<Co2Mass> {
    let config = load_config(&cli)?;

    let (Some(start), Some(end), Some(method)) =
        (cli.start, cli.end, cli.transportation_method)
    else {
        anyhow::bail!("--start, --end and --transportation-method are required");
    };

    let adapter = OrsDistanceAdapter::from_config(&config.ors)?;
    let calculator = TripCalculator::new(Arc::new(adapter));

    info!(%start, %end, %method, "Computing trip emissions");
    Ok(calculator.compute_mass(&start, &end, &method).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_methods {
        print_methods();
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(mass) => {
            println!("Your trip caused {mass}kg of CO2-equivalent.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        },
    }
}
